//! Implementation of #[derive(Inspect)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, parse_quote, Attribute, Data, DataEnum, DataStruct, DeriveInput, Expr,
    ExprLit, Fields, GenericParam, Generics, Index, Lit, LitStr, Meta,
};

pub fn derive_inspect_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    if let Some(attr) = find_checks(&input.attrs) {
        return Err(syn::Error::new_spanned(
            attr,
            "#[checks] belongs on struct fields, not on the type",
        ));
    }

    add_inspect_bounds(&mut input.generics);

    match &input.data {
        Data::Struct(data) => expand_struct(&input, data),
        Data::Enum(data) => expand_enum(&input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Inspect cannot be derived for unions",
        )),
    }
}

/// Every type parameter must itself be inspectable.
fn add_inspect_bounds(generics: &mut Generics) {
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::structcheck::Inspect));
        }
    }
}

fn expand_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let members = data
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let checks = match field_checks(&field.attrs)? {
                Some(list) => quote! { ::std::option::Option::Some(#list) },
                None => quote! { ::std::option::Option::None },
            };
            let (label, access) = match &field.ident {
                Some(ident) => (ident.unraw().to_string(), quote! { #ident }),
                None => {
                    let index = Index::from(i);
                    (i.to_string(), quote! { #index })
                }
            };
            Ok(quote! {
                ::structcheck::Member::new(#label, #checks, &self.#access)
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::structcheck::Inspect for #name #ty_generics #where_clause {
            fn kind(&self) -> ::structcheck::Kind<'_> {
                ::structcheck::Kind::Composite(self)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::structcheck::Composite for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #name_str
            }

            fn members(&self) -> ::std::vec::Vec<::structcheck::Member<'_>> {
                ::std::vec![#(#members),*]
            }
        }
    })
}

fn expand_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let arms = data
        .variants
        .iter()
        .map(|variant| {
            if let Some(attr) = find_checks(&variant.attrs) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "#[checks] is only supported on struct fields",
                ));
            }
            let ident = &variant.ident;
            let label = ident.unraw().to_string();
            match &variant.fields {
                Fields::Unit => Ok(quote! {
                    Self::#ident => ::structcheck::Kind::Variant {
                        name: #label,
                        value: ::std::option::Option::None,
                    }
                }),
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                    if let Some(attr) = fields.unnamed.iter().find_map(|f| find_checks(&f.attrs)) {
                        return Err(syn::Error::new_spanned(
                            attr,
                            "#[checks] is only supported on struct fields",
                        ));
                    }
                    Ok(quote! {
                        Self::#ident(payload) => ::structcheck::Kind::Variant {
                            name: #label,
                            value: ::std::option::Option::Some(
                                payload as &dyn ::structcheck::Inspect,
                            ),
                        }
                    })
                }
                _ => Err(syn::Error::new_spanned(
                    variant,
                    "Inspect can only be derived for enums whose variants are unit or single-field tuple variants",
                )),
            }
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#arms,)* } }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::structcheck::Inspect for #name #ty_generics #where_clause {
            fn kind(&self) -> ::structcheck::Kind<'_> {
                #body
            }
        }
    })
}

fn find_checks(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident("checks"))
}

/// Collect every `#[checks]` attribute on a field into one comma-separated list.
fn field_checks(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut lists = Vec::new();
    let mut span = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("checks")) {
        let list: LitStr = match &attr.meta {
            Meta::List(_) => attr.parse_args()?,
            Meta::NameValue(pair) => match &pair.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(list),
                    ..
                }) => list.clone(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal: #[checks = \"NotNil\"]",
                    ))
                }
            },
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected a constraint list: #[checks(\"NotNil\")]",
                ))
            }
        };
        span.get_or_insert(list.span());
        lists.push(list.value());
    }

    Ok(span.map(|span| LitStr::new(&lists.join(","), span)))
}
