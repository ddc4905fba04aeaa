mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives `rootfind_error::ErrorKind` for a struct, generating its `build_report` method from
/// an `error` attribute:
///
/// ```
/// use rootfind_attrs::ErrorKind;
/// use rootfind_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of expression", labels = ["add an operand here"])]
/// pub struct Foo;
/// ```
///
/// The attribute takes three tags, each an arbitrary expression:
///
/// - `message`: the headline of the rendered report.
/// - `labels`: an iterable of label texts, paired index-wise with the error's spans. An empty
///   string highlights the span without attaching a message.
/// - `help` (optional): a footer suggesting how to fix the error.
///
/// For structs with named fields, the expressions are evaluated with the fields in scope by
/// name. Tuple structs are not supported.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = target.name();
    quote! {
        impl ErrorKind for #name {
            #target
        }
    }.into()
}
