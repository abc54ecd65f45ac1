use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, FnArg, GenericArgument, Ident, ItemFn, Pat,
    PathArguments, Signature, Type,
};

/// Transform an asynchronous test into a synchronous one and inject
/// dependencies.
///
/// Injectable dependencies are [`rocket::local::asynchronous::Client`], built
/// around in-memory upstream services, and those services themselves as
/// `Arc<MemoryTemplateStore>` and `Arc<MemoryElectionService>`.
///
/// `#[backend_test(seeded)]` fills the template store with the example
/// templates before the test runs.
#[proc_macro_attribute]
pub fn backend_test(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);

    // Extract the injected arguments and reject invalid function signatures.
    let test_args = match check_sig(item_fn.sig.clone()) {
        Ok(args) => args,
        Err(err) => {
            return err.into_compile_error().into();
        }
    };

    // Rename the future so the test can have its original name.
    let name = item_fn.sig.ident.clone();
    let new_name = format_ident!("{}_fut", name);
    item_fn.sig.ident = new_name.clone();

    let maybe_seed = match parse_macro_input!(args as Option<Ident>) {
        Some(arg) if arg == "seeded" => quote! {
            crate::upstream::examples::seed_templates(&*templates).await;
        },
        Some(arg) => {
            return syn::Error::new(arg.span(), "Expected `seeded` or nothing")
                .into_compile_error()
                .into();
        }
        None => quote! {},
    };

    quote! {
        #[test]
        fn #name() {
            /// Test setup.
            async fn setup() -> (
                rocket::local::asynchronous::Client,
                std::sync::Arc<crate::upstream::MemoryTemplateStore>,
                std::sync::Arc<crate::upstream::MemoryElectionService>,
            ) {
                log4rs_test_utils::test_logging::init_logging_once_for(
                    ["election_config"],
                    None,
                    None,
                );

                let templates = std::sync::Arc::new(crate::upstream::MemoryTemplateStore::default());
                let elections = std::sync::Arc::new(crate::upstream::MemoryElectionService::default());

                #maybe_seed

                let upstream = crate::upstream::Upstream::new(templates.clone(), elections.clone());
                let rocket_client = rocket::local::asynchronous::Client::tracked(
                    crate::rocket_for_upstream(upstream),
                )
                .await
                .unwrap();

                (rocket_client, templates, elections)
            }

            /// The test itself.
            #item_fn

            let runtime = rocket::tokio::runtime::Builder::new_multi_thread()
                .thread_name("rocket-worker-test-thread")
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                #[allow(unused_variables)]
                let (rocket_client, templates, elections) = setup().await;
                #new_name(#(#test_args),*).await;
            });
        }
    }
    .into()
}

/// Ensure the wrapped test is async, map each parameter to the dependency it
/// asks for, and reject unknown parameters.
fn check_sig(sig: Signature) -> Result<Vec<TokenStream2>, syn::Error> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new(sig.span(), "Test must be marked `async`"));
    }

    let mut args = vec![];
    let mut seen = vec![];

    for input in &sig.inputs {
        let injected = match input {
            FnArg::Typed(pat_type) if matches!(&*pat_type.pat, Pat::Ident(_)) => {
                injected_name(&pat_type.ty)
            }
            _ => None,
        };
        let Some(injected) = injected else {
            return Err(syn::Error::new(
                input.span(),
                "Expected one of `client: Client`, `templates: Arc<MemoryTemplateStore>` \
                or `elections: Arc<MemoryElectionService>`",
            ));
        };
        if seen.contains(&injected) {
            return Err(syn::Error::new(
                input.span(),
                format!("Test cannot accept `{injected}` more than once"),
            ));
        }
        seen.push(injected);
        let ident = format_ident!("{}", injected);
        args.push(quote! { #ident });
    }

    Ok(args)
}

/// The setup binding that satisfies a parameter of type `ty`, if any.
fn injected_name(ty: &Type) -> Option<&'static str> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let last = type_path.path.segments.last()?;
    if last.ident == "Client" {
        return Some("rocket_client");
    }
    if last.ident != "Arc" {
        return None;
    }
    let PathArguments::AngleBracketed(generics) = &last.arguments else {
        return None;
    };
    let Some(GenericArgument::Type(Type::Path(inner))) = generics.args.first() else {
        return None;
    };
    let inner = &inner.path.segments.last()?.ident;
    if inner == "MemoryTemplateStore" {
        Some("templates")
    } else if inner == "MemoryElectionService" {
        Some("elections")
    } else {
        None
    }
}
