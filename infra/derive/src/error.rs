use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident,
    PathArguments, Type, Variant,
};

/// Everything the generator needs to know about one variant.
struct VariantShape<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg: Vec<Attribute>,
}

impl VariantShape<'_> {
    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("rorg_error can only be applied to enums"); };
    };

    let mut shapes = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match VariantShape::parse(variant) {
            Ok(shape) => shapes.push(shape),
            Err(err) => return err.to_compile_error(),
        }
    }

    if let Some(orphan) = shapes.iter().find(|s| s.source.is_some() && !s.has_context) {
        return syn::Error::new_spanned(
            orphan.ident,
            "rorg_error requires `context: Option<Cow<'static, str>>` next to a source field",
        )
        .to_compile_error();
    }

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input.attrs);
    let ext_trait = context_trait(name, &ext, &shapes);
    let conversions = shapes.iter().filter_map(|s| source_conversion(name, &ext, s));
    let internal = internal_conversions(name, &shapes);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #ext_trait
        #(#conversions)*
        #internal

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            match context {
                Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                None => std::borrow::Cow::Borrowed(""),
            }
        }
    }
}

impl<'a> VariantShape<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "rorg_error requires named fields so source/context can be wired",
            ));
        };

        let has_context = context_field(fields)?.is_some();
        let source = source_field(fields).and_then(|f| f.ident.as_ref().map(|id| (id, &f.ty)));
        let cfg = variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect();

        Ok(Self { ident: &variant.ident, source, has_context, cfg })
    }
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(None);
    };
    if is_optional_static_cow(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn source_field(fields: &FieldsNamed) -> Option<&Field> {
    fields.named.iter().find(|field| {
        field.ident.as_ref().is_some_and(|i| i == "source")
            || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
    })
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let mut present = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut wanted = Vec::new();
    if !present.contains("Debug") {
        wanted.push(quote! { Debug });
    }
    if !present.contains("Error") {
        wanted.push(quote! { ::thiserror::Error });
    }

    if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } }
}

fn context_trait(name: &Ident, ext: &Ident, shapes: &[VariantShape<'_>]) -> TokenStream {
    let arms = shapes.iter().filter(|s| s.has_context).map(|s| {
        let cfg = &s.cfg;
        let ident = s.ident;
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_conversion(name: &Ident, ext: &Ident, shape: &VariantShape<'_>) -> Option<TokenStream> {
    if shape.is_internal() {
        return None;
    }
    let (field, ty) = shape.source?;
    let ident = shape.ident;
    let cfg = &shape.cfg;

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg)*
        impl<T> #ext<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_conversions(name: &Ident, shapes: &[VariantShape<'_>]) -> TokenStream {
    let Some(internal) = shapes.iter().find(|s| s.is_internal()) else {
        return quote! {};
    };
    let cfg = &internal.cfg;

    quote! {
        #(#cfg)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfg)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

/// Matches `Option<Cow<'static, str>>`, with any path prefix on `Option`/`Cow`.
fn is_optional_static_cow(ty: &Type) -> bool {
    let Some(inner) = single_type_arg(ty, "Option") else {
        return false;
    };
    let Type::Path(path) = inner else {
        return false;
    };
    let Some(cow) = path.path.segments.last().filter(|seg| seg.ident == "Cow") else {
        return false;
    };
    let PathArguments::AngleBracketed(args) = &cow.arguments else {
        return false;
    };

    let mut args = args.args.iter();
    let static_lifetime =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_type = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|seg| seg.ident == "str")
    );

    static_lifetime && str_type
}

fn single_type_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last().filter(|seg| seg.ident == wrapper)?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn rejected(input: DeriveInput) -> bool {
        expand(input).to_string().contains("compile_error")
    }

    #[test]
    fn accepts_named_variants_with_context() {
        let input: DeriveInput = parse_quote! {
            pub enum DemoError {
                #[error("io{}: {source}", format_context(.context))]
                Io { source: std::io::Error, context: Option<std::borrow::Cow<'static, str>> },
                #[error("internal{}: {message}", format_context(.context))]
                Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
            }
        };
        let out = expand(input).to_string();
        assert!(!out.contains("compile_error"));
        assert!(out.contains("DemoErrorExt"));
        assert!(out.contains("From < std :: io :: Error >"));
        assert!(out.contains("From < & 'static str >"));
    }

    #[test]
    fn rejects_source_without_context() {
        assert!(rejected(parse_quote! {
            pub enum DemoError {
                #[error("io: {source}")]
                Io { source: std::io::Error },
            }
        }));
    }

    #[test]
    fn rejects_wrong_context_type() {
        assert!(rejected(parse_quote! {
            pub enum DemoError {
                #[error("bad: {message}")]
                Bad { message: String, context: Option<String> },
            }
        }));
    }

    #[test]
    fn rejects_tuple_variants_and_structs() {
        assert!(rejected(parse_quote! {
            pub enum DemoError {
                #[error("io: {0}")]
                Io(std::io::Error),
            }
        }));
        assert!(rejected(parse_quote! {
            pub struct NotAnEnum { message: String }
        }));
    }

    #[test]
    fn keeps_existing_derives() {
        let input: DeriveInput = parse_quote! {
            #[derive(Debug, thiserror::Error)]
            pub enum DemoError {
                #[error("x{}", format_context(.context))]
                X { context: Option<Cow<'static, str>> },
            }
        };
        let out = expand(input).to_string();
        assert!(!out.contains(":: thiserror :: Error"));
        assert_eq!(out.matches("Debug").count(), 1);
    }
}
