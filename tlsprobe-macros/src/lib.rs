mod into_repr;
mod readable_from_stream;
mod writable_to_sink;

use crate::into_repr::impl_into_repr;
use crate::writable_to_sink::impl_writable_to_sink;
use proc_macro::TokenStream;
use readable_from_stream::impl_readable_from_stream;
use syn::{DeriveInput, Ident};

fn get_repr_type(ast: &DeriveInput) -> Option<Ident> {
    for attr in &ast.attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }

        let mut ty: Option<Ident> = None;

        attr.parse_nested_meta(|meta| {
            match meta.path.get_ident().unwrap().to_string().as_str() {
                "u8" | "u16" | "u32" | "u64" => {
                    ty = meta.path.get_ident().cloned();
                }
                _ => {}
            }

            Ok(())
        })
        .unwrap();

        if ty.is_some() {
            return ty;
        }
    }

    None
}

#[proc_macro_derive(ReadableFromStream)]
pub fn readable_from_stream_macro(item: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(item).unwrap();
    impl_readable_from_stream(ast)
}

#[proc_macro_derive(WritableToSink)]
pub fn writable_to_sink_macro(item: TokenStream) -> TokenStream {
    let ast = syn::parse(item).unwrap();
    impl_writable_to_sink(ast).into()
}

#[proc_macro_derive(IntoRepr)]
pub fn into_repr(item: TokenStream) -> TokenStream {
    let ast = syn::parse(item).unwrap();
    impl_into_repr(ast)
}
