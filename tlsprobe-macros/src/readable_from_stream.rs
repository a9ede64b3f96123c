use crate::get_repr_type;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

pub fn impl_readable_from_stream(ast: DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let body = match &ast.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => {
                let calls = fields.named.iter().map(|f| {
                    let ident = f.ident.as_ref().unwrap();
                    let ty = &f.ty;

                    quote! { #ident: <#ty as crate::tls::ReadableFromStream>::read(stream)? }
                });
                quote! { Ok(Self { #( #calls ),* }) }
            }
            Fields::Unnamed(fields) => {
                let calls = fields.unnamed.iter().enumerate().map(|(i, f)| {
                    let ty = &f.ty;
                    let idx = syn::Index::from(i);
                    quote! { #idx: <#ty as crate::tls::ReadableFromStream>::read(stream)? }
                });
                quote! { Ok(Self { #( #calls ),* }) }
            }
            Fields::Unit => {
                quote! { Ok(Self) }
            }
        },
        Data::Enum(data_enum) => {
            let repr = get_repr_type(&ast);

            if repr.is_none() {
                return quote! { compile_error!("ReadableFromStream requires a repr attribute with an unsigned integer type on enums."); }.into();
            }

            let repr = repr.unwrap();
            let mut cases = Vec::with_capacity(data_enum.variants.len());

            for variant in data_enum.variants.iter() {
                let variant_name = &variant.ident;

                if !variant.fields.is_empty() {
                    return quote! { compile_error!("ReadableFromStream requires enum variants without fields"); }.into();
                }

                if let Some((_, value)) = &variant.discriminant {
                    cases.push(quote! { #value => Ok(#name::#variant_name) });
                } else {
                    return quote! { compile_error!("ReadableFromStream requires all enum variants to have a discriminant"); }.into();
                }
            }

            let lit_name = LitStr::new(name.to_string().as_str(), name.span());

            quote! {
                let value: #repr = crate::tls::ReadableFromStream::read(stream)?;
                match value {
                    #( #cases ),*,
                    _ => Err(crate::tls::error::TlsError::UnknownValue {
                        what: #lit_name,
                        value: value as u64,
                    }),
                }
            }
        }
        _ => {
            return quote! {
                compile_error!("ReadableFromStream only works on structs and enums");
            }
            .into();
        }
    };

    quote! {
        impl crate::tls::ReadableFromStream for #name {
            fn read(stream: &mut crate::tls::record::ByteStream<'_>) -> crate::tls::error::Result<#name> {
                #body
            }
        }
    }
    .into()
}
