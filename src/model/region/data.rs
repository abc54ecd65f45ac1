//! Built-in region reference data for India.
//!
//! Districts are listed for every State/UT that has a legislative assembly.
//! Assembly constituencies are only enumerated for some districts; the rest
//! are entered as free text. National constituencies are enumerated in full
//! for a State or not at all.

use super::catalog::{DistrictRecord, StateKind, StateRecord};

macro_rules! districts {
    ($($name:literal $(=> [$($constituency:literal),* $(,)?])?),* $(,)?) => {
        &[$(DistrictRecord {
            name: $name,
            constituencies: &[$($($constituency),*)?],
        }),*]
    };
}

pub(super) static INDIA: &[StateRecord] = &[
    StateRecord {
        name: "Andhra Pradesh",
        kind: StateKind::State,
        lok_sabha_seats: 25,
        vidhan_sabha_seats: Some(175),
        districts: districts![
            "Alluri Sitharama Raju", "Anakapalli", "Anantapur", "Annamayya", "Bapatla",
            "Chittoor", "Dr. B.R. Ambedkar Konaseema", "East Godavari", "Eluru", "Guntur",
            "Kakinada", "Krishna", "Kurnool", "Nandyal", "NTR", "Palnadu",
            "Parvathipuram Manyam", "Prakasam", "Sri Potti Sriramulu Nellore",
            "Sri Sathya Sai", "Srikakulam", "Tirupati", "Visakhapatnam", "Vizianagaram",
            "West Godavari", "YSR Kadapa",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Arunachal Pradesh",
        kind: StateKind::State,
        lok_sabha_seats: 2,
        vidhan_sabha_seats: Some(60),
        districts: districts![
            "Anjaw", "Changlang", "Dibang Valley", "East Kameng", "East Siang", "Kamle",
            "Kra Daadi", "Kurung Kumey", "Lepa Rada", "Lohit", "Longding",
            "Lower Dibang Valley", "Lower Siang", "Lower Subansiri", "Namsai",
            "Pakke Kessang", "Papum Pare", "Shi Yomi", "Siang", "Tawang", "Tirap",
            "Upper Siang", "Upper Subansiri", "West Kameng", "West Siang",
        ],
        national_constituencies: &["Arunachal West", "Arunachal East"],
    },
    StateRecord {
        name: "Assam",
        kind: StateKind::State,
        lok_sabha_seats: 14,
        vidhan_sabha_seats: Some(126),
        districts: districts![
            "Bajali", "Baksa", "Barpeta", "Biswanath", "Bongaigaon", "Cachar", "Charaideo",
            "Chirang", "Darrang", "Dhemaji", "Dhubri", "Dibrugarh", "Dima Hasao",
            "Goalpara", "Golaghat", "Hailakandi", "Hojai", "Jorhat", "Kamrup",
            "Kamrup Metropolitan", "Karbi Anglong", "Karimganj", "Kokrajhar", "Lakhimpur",
            "Majuli", "Morigaon", "Nagaon", "Nalbari", "Sivasagar", "Sonitpur",
            "South Salmara-Mankachar", "Tamulpur", "Tinsukia", "Udalguri",
            "West Karbi Anglong",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Bihar",
        kind: StateKind::State,
        lok_sabha_seats: 40,
        vidhan_sabha_seats: Some(243),
        districts: districts![
            "Araria", "Arwal", "Aurangabad", "Banka", "Begusarai", "Bhagalpur", "Bhojpur",
            "Buxar", "Darbhanga", "East Champaran", "Gaya", "Gopalganj", "Jamui",
            "Jehanabad", "Kaimur", "Katihar", "Khagaria", "Kishanganj", "Lakhisarai",
            "Madhepura", "Madhubani", "Munger", "Muzaffarpur", "Nalanda", "Nawada",
            "Patna", "Purnia", "Rohtas", "Saharsa", "Samastipur", "Saran", "Sheikhpura",
            "Sheohar", "Sitamarhi", "Siwan", "Supaul", "Vaishali", "West Champaran",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Chhattisgarh",
        kind: StateKind::State,
        lok_sabha_seats: 11,
        vidhan_sabha_seats: Some(90),
        districts: districts![
            "Balod", "Baloda Bazar", "Balrampur", "Bastar", "Bemetara", "Bijapur",
            "Bilaspur", "Dantewada", "Dhamtari", "Durg", "Gariaband",
            "Gaurela-Pendra-Marwahi", "Janjgir-Champa", "Jashpur", "Kabirdham", "Kanker",
            "Khairagarh-Chhuikhadan-Gandai", "Kondagaon", "Korba", "Koriya", "Mahasamund",
            "Manendragarh-Chirmiri-Bharatpur", "Mohla-Manpur-Ambagarh Chowki", "Mungeli",
            "Narayanpur", "Raigarh", "Raipur", "Rajnandgaon", "Sakti",
            "Sarangarh-Bilaigarh", "Sukma", "Surajpur", "Surguja",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Goa",
        kind: StateKind::State,
        lok_sabha_seats: 2,
        vidhan_sabha_seats: Some(40),
        districts: districts![
            "North Goa" => [
                "Mandrem", "Pernem", "Bicholim", "Tivim", "Mapusa", "Siolim", "Saligao",
                "Calangute", "Porvorim", "Aldona", "Panaji", "Taleigao", "Santa Cruz",
                "St. Andre", "Cumbarjua", "Maem", "Sanquelim", "Poriem", "Valpoi", "Priol",
                "Ponda", "Siroda", "Marcaim",
            ],
            "South Goa" => [
                "Mormugao", "Vasco da Gama", "Dabolim", "Cortalim", "Nuvem", "Curtorim",
                "Fatorda", "Margao", "Benaulim", "Navelim", "Cuncolim", "Velim", "Quepem",
                "Curchorem", "Sanvordem", "Sanguem", "Canacona",
            ],
        ],
        national_constituencies: &["North Goa", "South Goa"],
    },
    StateRecord {
        name: "Gujarat",
        kind: StateKind::State,
        lok_sabha_seats: 26,
        vidhan_sabha_seats: Some(182),
        districts: districts![
            "Ahmedabad", "Amreli", "Anand", "Aravalli", "Banaskantha", "Bharuch",
            "Bhavnagar", "Botad", "Chhota Udaipur", "Dahod", "Dang", "Devbhoomi Dwarka",
            "Gandhinagar", "Gir Somnath", "Jamnagar", "Junagadh", "Kheda", "Kutch",
            "Mahisagar", "Mehsana", "Morbi", "Narmada", "Navsari", "Panchmahal", "Patan",
            "Porbandar", "Rajkot", "Sabarkantha", "Surat", "Surendranagar", "Tapi",
            "Vadodara", "Valsad",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Haryana",
        kind: StateKind::State,
        lok_sabha_seats: 10,
        vidhan_sabha_seats: Some(90),
        districts: districts![
            "Ambala", "Bhiwani", "Charkhi Dadri", "Faridabad", "Fatehabad", "Gurugram",
            "Hisar", "Jhajjar", "Jind", "Kaithal", "Karnal", "Kurukshetra", "Mahendragarh",
            "Nuh", "Palwal", "Panchkula", "Panipat", "Rewari", "Rohtak", "Sirsa", "Sonipat",
            "Yamunanagar",
        ],
        national_constituencies: &[
            "Ambala", "Kurukshetra", "Sirsa", "Hisar", "Karnal", "Sonipat", "Rohtak",
            "Bhiwani-Mahendragarh", "Gurgaon", "Faridabad",
        ],
    },
    StateRecord {
        name: "Himachal Pradesh",
        kind: StateKind::State,
        lok_sabha_seats: 4,
        vidhan_sabha_seats: Some(68),
        districts: districts![
            "Bilaspur", "Chamba", "Hamirpur", "Kangra", "Kinnaur", "Kullu",
            "Lahaul and Spiti", "Mandi", "Shimla", "Sirmaur", "Solan", "Una",
        ],
        national_constituencies: &["Kangra", "Mandi", "Hamirpur", "Shimla"],
    },
    StateRecord {
        name: "Jharkhand",
        kind: StateKind::State,
        lok_sabha_seats: 14,
        vidhan_sabha_seats: Some(81),
        districts: districts![
            "Bokaro", "Chatra", "Deoghar", "Dhanbad", "Dumka", "East Singhbhum", "Garhwa",
            "Giridih", "Godda", "Gumla", "Hazaribagh", "Jamtara", "Khunti", "Koderma",
            "Latehar", "Lohardaga", "Pakur", "Palamu", "Ramgarh", "Ranchi", "Sahibganj",
            "Seraikela Kharsawan", "Simdega", "West Singhbhum",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Karnataka",
        kind: StateKind::State,
        lok_sabha_seats: 28,
        vidhan_sabha_seats: Some(224),
        districts: districts![
            "Bagalkot" => [
                "Mudhol", "Terdal", "Jamkhandi", "Bilgi", "Badami", "Bagalkot", "Hungund",
            ],
            "Ballari",
            "Belagavi",
            "Bengaluru Rural",
            "Bengaluru Urban" => [
                "Yelahanka", "K.R. Pura", "Byatarayanapura", "Yeshvanthapura",
                "Rajarajeshwarinagar", "Dasarahalli", "Mahalakshmi Layout", "Malleshwaram",
                "Hebbal", "Pulakeshinagar", "Sarvagnanagar", "C.V. Raman Nagar",
                "Shivajinagar", "Shanti Nagar", "Gandhi Nagar", "Rajaji Nagar",
                "Govindraj Nagar", "Vijay Nagar", "Chamrajpet", "Chickpet", "Basavanagudi",
                "Padmanaba Nagar", "B.T.M. Layout", "Jayanagar", "Mahadevapura",
                "Bommanahalli", "Bangalore South", "Anekal",
            ],
            "Bidar",
            "Chamarajanagar",
            "Chikkaballapur",
            "Chikkamagaluru",
            "Chitradurga",
            "Dakshina Kannada",
            "Davanagere",
            "Dharwad",
            "Gadag",
            "Hassan",
            "Haveri",
            "Kalaburagi",
            "Kodagu" => ["Madikeri", "Virajpet"],
            "Kolar",
            "Koppal",
            "Mandya",
            "Mysuru",
            "Raichur",
            "Ramanagara",
            "Shivamogga",
            "Tumakuru",
            "Udupi" => ["Byndoor", "Kundapura", "Udupi", "Kapu", "Karkala"],
            "Uttara Kannada",
            "Vijayanagara",
            "Vijayapura",
            "Yadgir",
        ],
        national_constituencies: &[
            "Chikkodi", "Belgaum", "Bagalkot", "Bijapur", "Gulbarga", "Raichur", "Bidar",
            "Koppal", "Bellary", "Haveri", "Dharwad", "Uttara Kannada", "Davanagere",
            "Shimoga", "Udupi Chikmagalur", "Hassan", "Dakshina Kannada", "Chitradurga",
            "Tumkur", "Mandya", "Mysore", "Chamarajanagar", "Bangalore Rural",
            "Bangalore North", "Bangalore Central", "Bangalore South", "Chikballapur",
            "Kolar",
        ],
    },
    StateRecord {
        name: "Kerala",
        kind: StateKind::State,
        lok_sabha_seats: 20,
        vidhan_sabha_seats: Some(140),
        districts: districts![
            "Alappuzha",
            "Ernakulam",
            "Idukki",
            "Kannur",
            "Kasaragod",
            "Kollam",
            "Kottayam",
            "Kozhikode",
            "Malappuram",
            "Palakkad",
            "Pathanamthitta",
            "Thiruvananthapuram",
            "Thrissur",
            "Wayanad" => ["Mananthavady", "Sulthan Bathery", "Kalpetta"],
        ],
        national_constituencies: &[
            "Kasaragod", "Kannur", "Vadakara", "Wayanad", "Kozhikode", "Malappuram",
            "Ponnani", "Palakkad", "Alathur", "Thrissur", "Chalakudy", "Ernakulam",
            "Idukki", "Kottayam", "Alappuzha", "Mavelikara", "Pathanamthitta", "Kollam",
            "Attingal", "Thiruvananthapuram",
        ],
    },
    StateRecord {
        name: "Madhya Pradesh",
        kind: StateKind::State,
        lok_sabha_seats: 29,
        vidhan_sabha_seats: Some(230),
        districts: districts![
            "Agar Malwa", "Alirajpur", "Anuppur", "Ashoknagar", "Balaghat", "Barwani",
            "Betul", "Bhind", "Bhopal", "Burhanpur", "Chhatarpur", "Chhindwara", "Damoh",
            "Datia", "Dewas", "Dhar", "Dindori", "Guna", "Gwalior", "Harda", "Indore",
            "Jabalpur", "Jhabua", "Katni", "Khandwa", "Khargone", "Maihar", "Mandla",
            "Mandsaur", "Mauganj", "Morena", "Narmadapuram", "Narsinghpur", "Neemuch",
            "Niwari", "Pandhurna", "Panna", "Raisen", "Rajgarh", "Ratlam", "Rewa", "Sagar",
            "Satna", "Sehore", "Seoni", "Shahdol", "Shajapur", "Sheopur", "Shivpuri",
            "Sidhi", "Singrauli", "Tikamgarh", "Ujjain", "Umaria", "Vidisha",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Maharashtra",
        kind: StateKind::State,
        lok_sabha_seats: 48,
        vidhan_sabha_seats: Some(288),
        districts: districts![
            "Ahmednagar",
            "Akola",
            "Amravati",
            "Beed",
            "Bhandara",
            "Buldhana",
            "Chandrapur",
            "Chhatrapati Sambhajinagar",
            "Dharashiv",
            "Dhule",
            "Gadchiroli",
            "Gondia",
            "Hingoli",
            "Jalgaon",
            "Jalna",
            "Kolhapur",
            "Latur",
            "Mumbai City" => [
                "Dharavi", "Sion Koliwada", "Wadala", "Mahim", "Worli", "Shivadi", "Byculla",
                "Malabar Hill", "Mumbadevi", "Colaba",
            ],
            "Mumbai Suburban",
            "Nagpur",
            "Nanded",
            "Nandurbar",
            "Nashik",
            "Palghar",
            "Parbhani",
            "Pune" => [
                "Junnar", "Ambegaon", "Khed Alandi", "Shirur", "Daund", "Indapur",
                "Baramati", "Purandar", "Bhor", "Maval", "Chinchwad", "Pimpri", "Bhosari",
                "Vadgaon Sheri", "Shivajinagar", "Kothrud", "Khadakwasla", "Parvati",
                "Hadapsar", "Pune Cantonment", "Kasba Peth",
            ],
            "Raigad",
            "Ratnagiri",
            "Sangli",
            "Satara",
            "Sindhudurg",
            "Solapur",
            "Thane",
            "Wardha",
            "Washim",
            "Yavatmal",
        ],
        national_constituencies: &[
            "Nandurbar", "Dhule", "Jalgaon", "Raver", "Buldhana", "Akola", "Amravati",
            "Wardha", "Ramtek", "Nagpur", "Bhandara-Gondiya", "Gadchiroli-Chimur",
            "Chandrapur", "Yavatmal-Washim", "Hingoli", "Nanded", "Parbhani", "Jalna",
            "Aurangabad", "Dindori", "Nashik", "Palghar", "Bhiwandi", "Kalyan", "Thane",
            "Mumbai North", "Mumbai North West", "Mumbai North East", "Mumbai North Central",
            "Mumbai South Central", "Mumbai South", "Raigad", "Maval", "Pune", "Baramati",
            "Shirur", "Ahmednagar", "Shirdi", "Beed", "Osmanabad", "Latur", "Solapur",
            "Madha", "Sangli", "Satara", "Ratnagiri-Sindhudurg", "Kolhapur", "Hatkanangle",
        ],
    },
    StateRecord {
        name: "Manipur",
        kind: StateKind::State,
        lok_sabha_seats: 2,
        vidhan_sabha_seats: Some(60),
        districts: districts![
            "Bishnupur", "Chandel", "Churachandpur", "Imphal East", "Imphal West",
            "Jiribam", "Kakching", "Kamjong", "Kangpokpi", "Noney", "Pherzawl", "Senapati",
            "Tamenglong", "Tengnoupal", "Thoubal", "Ukhrul",
        ],
        national_constituencies: &["Inner Manipur", "Outer Manipur"],
    },
    StateRecord {
        name: "Meghalaya",
        kind: StateKind::State,
        lok_sabha_seats: 2,
        vidhan_sabha_seats: Some(60),
        districts: districts![
            "East Garo Hills", "East Jaintia Hills", "East Khasi Hills",
            "Eastern West Khasi Hills", "North Garo Hills", "Ri Bhoi", "South Garo Hills",
            "South West Garo Hills", "South West Khasi Hills", "West Garo Hills",
            "West Jaintia Hills", "West Khasi Hills",
        ],
        national_constituencies: &["Shillong", "Tura"],
    },
    StateRecord {
        name: "Mizoram",
        kind: StateKind::State,
        lok_sabha_seats: 1,
        vidhan_sabha_seats: Some(40),
        districts: districts![
            "Aizawl", "Champhai", "Hnahthial", "Khawzawl", "Kolasib", "Lawngtlai",
            "Lunglei", "Mamit", "Saiha", "Saitual", "Serchhip",
        ],
        national_constituencies: &["Mizoram"],
    },
    StateRecord {
        name: "Nagaland",
        kind: StateKind::State,
        lok_sabha_seats: 1,
        vidhan_sabha_seats: Some(60),
        districts: districts![
            "Chumoukedima", "Dimapur", "Kiphire", "Kohima", "Longleng", "Mokokchung", "Mon",
            "Niuland", "Noklak", "Peren", "Phek", "Shamator", "Tseminyu", "Tuensang",
            "Wokha", "Zunheboto",
        ],
        national_constituencies: &["Nagaland"],
    },
    StateRecord {
        name: "Odisha",
        kind: StateKind::State,
        lok_sabha_seats: 21,
        vidhan_sabha_seats: Some(147),
        districts: districts![
            "Angul", "Balangir", "Balasore", "Bargarh", "Bhadrak", "Boudh", "Cuttack",
            "Deogarh", "Dhenkanal", "Gajapati", "Ganjam", "Jagatsinghpur", "Jajpur",
            "Jharsuguda", "Kalahandi", "Kandhamal", "Kendrapara", "Kendujhar", "Khordha",
            "Koraput", "Malkangiri", "Mayurbhanj", "Nabarangpur", "Nayagarh", "Nuapada",
            "Puri", "Rayagada", "Sambalpur", "Subarnapur", "Sundargarh",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Punjab",
        kind: StateKind::State,
        lok_sabha_seats: 13,
        vidhan_sabha_seats: Some(117),
        districts: districts![
            "Amritsar", "Barnala", "Bathinda", "Faridkot", "Fatehgarh Sahib", "Fazilka",
            "Ferozepur", "Gurdaspur", "Hoshiarpur", "Jalandhar", "Kapurthala", "Ludhiana",
            "Malerkotla", "Mansa", "Moga", "Pathankot", "Patiala", "Rupnagar",
            "Sahibzada Ajit Singh Nagar", "Sangrur", "Shaheed Bhagat Singh Nagar",
            "Sri Muktsar Sahib", "Tarn Taran",
        ],
        national_constituencies: &[
            "Gurdaspur", "Amritsar", "Khadoor Sahib", "Jalandhar", "Hoshiarpur",
            "Anandpur Sahib", "Ludhiana", "Fatehgarh Sahib", "Faridkot", "Firozpur",
            "Bathinda", "Sangrur", "Patiala",
        ],
    },
    StateRecord {
        name: "Rajasthan",
        kind: StateKind::State,
        lok_sabha_seats: 25,
        vidhan_sabha_seats: Some(200),
        districts: districts![
            "Ajmer", "Alwar", "Banswara", "Baran", "Barmer", "Bharatpur", "Bhilwara",
            "Bikaner", "Bundi", "Chittorgarh", "Churu", "Dausa", "Dholpur", "Dungarpur",
            "Hanumangarh", "Jaipur", "Jaisalmer", "Jalore", "Jhalawar", "Jhunjhunu",
            "Jodhpur", "Karauli", "Kota", "Nagaur", "Pali", "Pratapgarh", "Rajsamand",
            "Sawai Madhopur", "Sikar", "Sirohi", "Sri Ganganagar", "Tonk", "Udaipur",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Sikkim",
        kind: StateKind::State,
        lok_sabha_seats: 1,
        vidhan_sabha_seats: Some(32),
        districts: districts!["Gangtok", "Gyalshing", "Mangan", "Namchi", "Pakyong", "Soreng"],
        national_constituencies: &["Sikkim"],
    },
    StateRecord {
        name: "Tamil Nadu",
        kind: StateKind::State,
        lok_sabha_seats: 39,
        vidhan_sabha_seats: Some(234),
        districts: districts![
            "Ariyalur", "Chengalpattu", "Chennai", "Coimbatore", "Cuddalore", "Dharmapuri",
            "Dindigul", "Erode", "Kallakurichi", "Kancheepuram", "Kanniyakumari", "Karur",
            "Krishnagiri", "Madurai", "Mayiladuthurai", "Nagapattinam", "Namakkal",
            "Nilgiris", "Perambalur", "Pudukkottai", "Ramanathapuram", "Ranipet", "Salem",
            "Sivaganga", "Tenkasi", "Thanjavur", "Theni", "Thoothukudi", "Tiruchirappalli",
            "Tirunelveli", "Tirupathur", "Tiruppur", "Tiruvallur", "Tiruvannamalai",
            "Tiruvarur", "Vellore", "Viluppuram", "Virudhunagar",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Telangana",
        kind: StateKind::State,
        lok_sabha_seats: 17,
        vidhan_sabha_seats: Some(119),
        districts: districts![
            "Adilabad", "Bhadradri Kothagudem", "Hanumakonda", "Hyderabad", "Jagtial",
            "Jangaon", "Jayashankar Bhupalpally", "Jogulamba Gadwal", "Kamareddy",
            "Karimnagar", "Khammam", "Kumuram Bheem Asifabad", "Mahabubabad",
            "Mahabubnagar", "Mancherial", "Medak", "Medchal-Malkajgiri", "Mulugu",
            "Nagarkurnool", "Nalgonda", "Narayanpet", "Nirmal", "Nizamabad", "Peddapalli",
            "Rajanna Sircilla", "Ranga Reddy", "Sangareddy", "Siddipet", "Suryapet",
            "Vikarabad", "Wanaparthy", "Warangal", "Yadadri Bhuvanagiri",
        ],
        national_constituencies: &[
            "Adilabad", "Peddapalle", "Karimnagar", "Nizamabad", "Zahirabad", "Medak",
            "Malkajgiri", "Secunderabad", "Hyderabad", "Chevella", "Mahbubnagar",
            "Nagarkurnool", "Nalgonda", "Bhongir", "Warangal", "Mahabubabad", "Khammam",
        ],
    },
    StateRecord {
        name: "Tripura",
        kind: StateKind::State,
        lok_sabha_seats: 2,
        vidhan_sabha_seats: Some(60),
        districts: districts![
            "Dhalai", "Gomati", "Khowai", "North Tripura", "Sepahijala", "South Tripura",
            "Unakoti", "West Tripura",
        ],
        national_constituencies: &["Tripura West", "Tripura East"],
    },
    StateRecord {
        name: "Uttar Pradesh",
        kind: StateKind::State,
        lok_sabha_seats: 80,
        vidhan_sabha_seats: Some(403),
        districts: districts![
            "Agra", "Aligarh", "Ambedkar Nagar", "Amethi", "Amroha", "Auraiya", "Ayodhya",
            "Azamgarh", "Baghpat", "Bahraich", "Ballia", "Balrampur", "Banda", "Barabanki",
            "Bareilly", "Basti", "Bhadohi", "Bijnor", "Budaun", "Bulandshahr", "Chandauli",
            "Chitrakoot", "Deoria", "Etah", "Etawah", "Farrukhabad", "Fatehpur",
            "Firozabad", "Gautam Buddha Nagar", "Ghaziabad", "Ghazipur", "Gonda",
            "Gorakhpur", "Hamirpur", "Hapur", "Hardoi", "Hathras", "Jalaun", "Jaunpur",
            "Jhansi", "Kannauj", "Kanpur Dehat", "Kanpur Nagar", "Kasganj", "Kaushambi",
            "Kushinagar", "Lakhimpur Kheri", "Lalitpur",
            "Lucknow" => [
                "Malihabad", "Bakshi Kaa Talab", "Sarojini Nagar", "Lucknow West",
                "Lucknow North", "Lucknow East", "Lucknow Central", "Lucknow Cantonment",
                "Mohanlalganj",
            ],
            "Maharajganj", "Mahoba", "Mainpuri", "Mathura", "Mau", "Meerut", "Mirzapur",
            "Moradabad", "Muzaffarnagar", "Pilibhit", "Pratapgarh", "Prayagraj",
            "Raebareli", "Rampur", "Saharanpur", "Sambhal", "Sant Kabir Nagar",
            "Shahjahanpur", "Shamli", "Shravasti", "Siddharthnagar", "Sitapur",
            "Sonbhadra", "Sultanpur", "Unnao", "Varanasi",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Uttarakhand",
        kind: StateKind::State,
        lok_sabha_seats: 5,
        vidhan_sabha_seats: Some(70),
        districts: districts![
            "Almora", "Bageshwar", "Chamoli", "Champawat", "Dehradun", "Haridwar",
            "Nainital", "Pauri Garhwal", "Pithoragarh", "Rudraprayag", "Tehri Garhwal",
            "Udham Singh Nagar", "Uttarkashi",
        ],
        national_constituencies: &[
            "Tehri Garhwal", "Garhwal", "Almora", "Nainital-Udhamsingh Nagar", "Haridwar",
        ],
    },
    StateRecord {
        name: "West Bengal",
        kind: StateKind::State,
        lok_sabha_seats: 42,
        vidhan_sabha_seats: Some(294),
        districts: districts![
            "Alipurduar", "Bankura", "Birbhum", "Cooch Behar", "Dakshin Dinajpur",
            "Darjeeling", "Hooghly", "Howrah", "Jalpaiguri", "Jhargram", "Kalimpong",
            "Kolkata", "Malda", "Murshidabad", "Nadia", "North 24 Parganas",
            "Paschim Bardhaman", "Paschim Medinipur", "Purba Bardhaman", "Purba Medinipur",
            "Purulia", "South 24 Parganas", "Uttar Dinajpur",
        ],
        national_constituencies: &[],
    },
    StateRecord {
        name: "Andaman and Nicobar Islands",
        kind: StateKind::UnionTerritory,
        lok_sabha_seats: 1,
        vidhan_sabha_seats: None,
        districts: &[],
        national_constituencies: &["Andaman and Nicobar Islands"],
    },
    StateRecord {
        name: "Chandigarh",
        kind: StateKind::UnionTerritory,
        lok_sabha_seats: 1,
        vidhan_sabha_seats: None,
        districts: &[],
        national_constituencies: &["Chandigarh"],
    },
    StateRecord {
        name: "Dadra and Nagar Haveli and Daman and Diu",
        kind: StateKind::UnionTerritory,
        lok_sabha_seats: 2,
        vidhan_sabha_seats: None,
        districts: &[],
        national_constituencies: &["Dadra and Nagar Haveli", "Daman and Diu"],
    },
    StateRecord {
        name: "Delhi",
        kind: StateKind::UnionTerritory,
        lok_sabha_seats: 7,
        vidhan_sabha_seats: Some(70),
        districts: districts![
            "Central Delhi", "East Delhi", "New Delhi", "North Delhi", "North East Delhi",
            "North West Delhi", "Shahdara", "South Delhi", "South East Delhi",
            "South West Delhi", "West Delhi",
        ],
        national_constituencies: &[
            "Chandni Chowk", "North East Delhi", "East Delhi", "New Delhi",
            "North West Delhi", "West Delhi", "South Delhi",
        ],
    },
    StateRecord {
        name: "Jammu and Kashmir",
        kind: StateKind::UnionTerritory,
        lok_sabha_seats: 5,
        vidhan_sabha_seats: Some(90),
        districts: districts![
            "Anantnag", "Bandipora", "Baramulla", "Budgam", "Doda", "Ganderbal", "Jammu",
            "Kathua", "Kishtwar", "Kulgam", "Kupwara", "Poonch", "Pulwama", "Rajouri",
            "Ramban", "Reasi", "Samba", "Shopian", "Srinagar", "Udhampur",
        ],
        national_constituencies: &[
            "Baramulla", "Srinagar", "Anantnag-Rajouri", "Udhampur", "Jammu",
        ],
    },
    StateRecord {
        name: "Ladakh",
        kind: StateKind::UnionTerritory,
        lok_sabha_seats: 1,
        vidhan_sabha_seats: None,
        districts: &[],
        national_constituencies: &["Ladakh"],
    },
    StateRecord {
        name: "Lakshadweep",
        kind: StateKind::UnionTerritory,
        lok_sabha_seats: 1,
        vidhan_sabha_seats: None,
        districts: &[],
        national_constituencies: &["Lakshadweep"],
    },
    StateRecord {
        name: "Puducherry",
        kind: StateKind::UnionTerritory,
        lok_sabha_seats: 1,
        vidhan_sabha_seats: Some(30),
        districts: districts![
            "Karaikal" => [
                "Nedungadu", "Thirunallar", "Karaikal North", "Karaikal South",
                "Neravy T.R. Pattinam",
            ],
            "Mahe" => ["Mahe"],
            "Puducherry",
            "Yanam" => ["Yanam"],
        ],
        national_constituencies: &["Puducherry"],
    },
];
