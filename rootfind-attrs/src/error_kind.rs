use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// One `name = expr` entry inside the `error` attribute.
struct ErrorArg {
    name: Ident,
    value: Expr,
}

impl Parse for ErrorArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(Self { name, value })
    }
}

/// The report pieces collected from the `error` attribute: the top-line message, a label text
/// for each span, and an optional help footer.
#[derive(Default)]
struct ErrorArgs {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ErrorArgs {
    fn collect(args: Punctuated<ErrorArg, Token![,]>) -> Result<Self> {
        let mut out = Self::default();
        for arg in args {
            let slot = match arg.name.to_string().as_str() {
                "message" => &mut out.message,
                "labels" => &mut out.labels,
                "help" => &mut out.help,
                other => return Err(syn::Error::new_spanned(
                    &arg.name,
                    format!("unknown tag `{other}`; expected `message`, `labels` or `help`"),
                )),
            };
            *slot = Some(arg.value);
        }
        Ok(out)
    }
}

/// Everything the derive needs from the annotated struct.
pub struct ErrorKindTarget {
    name: Ident,
    fields: Fields,
    args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item: DeriveInput = input.parse()?;
        let fields = match item.data {
            Data::Struct(data) => data.fields,
            _ => return Err(syn::Error::new_spanned(
                &item.ident,
                "`ErrorKind` can only be derived for structs",
            )),
        };

        let mut args = ErrorArgs::default();
        for attr in &item.attrs {
            if attr.path().is_ident("error") {
                let parsed = attr.parse_args_with(Punctuated::parse_terminated)?;
                args = ErrorArgs::collect(parsed)?;
                break;
            }
        }

        Ok(Self {
            name: item.ident,
            fields,
            args,
        })
    }
}

impl ErrorKindTarget {
    /// Returns the name of the annotated struct.
    pub fn name(&self) -> &Ident {
        &self.name
    }

    /// A statement bringing the struct's fields into scope by name, so the attribute's
    /// expressions can mention them directly.
    fn bind_fields(&self) -> TokenStream2 {
        match &self.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote! { let Self { #(#names),* } = self; }
            },
            Fields::Unit => TokenStream2::new(),
            Fields::Unnamed(_) => quote_spanned! {
                self.name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bind_fields = self.bind_fields();
        let message = self.args.message.as_ref();
        let labels = self.args.labels.as_ref();
        let help = self.args.help.as_ref().map(|expr| quote! {
            report = report.with_help(#expr);
        });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #bind_fields

                let mut report = ariadne::Report::build(
                    ariadne::ReportKind::Error,
                    src_id,
                    spans.first().map_or(0, |span| span.start),
                ).with_message(#message);

                // labels pair up with the error's spans index-wise; empty label text marks the
                // span without a message
                for (span, label_text) in spans.iter().zip(#labels) {
                    let mut label = ariadne::Label::new((src_id, span.clone()))
                        .with_color(rootfind_error::EXPR);
                    let label_text = label_text.to_string();
                    if !label_text.is_empty() {
                        label = label.with_message(label_text);
                    }
                    report = report.with_label(label);
                }

                #help
                report.finish()
            }
        });
    }
}
