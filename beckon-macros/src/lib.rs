use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Ident, ImplItem, ItemImpl, LitStr, parse::Nothing, parse_macro_input};

/// Attribute macro that builds a method table from an inherent impl block.
///
/// Every `&self` method in the block becomes an invokable member under its
/// own name, and the type gains a `Reflect` implementation backed by a
/// lazily built `MethodTable`. Associated functions without a receiver are
/// ignored; methods marked `#[beckon(skip)]` are left out of the table.
///
/// ```rust,ignore
/// #[methods]
/// impl Clock {
///     fn get_time(&self) -> i64 { self.millis.get() }   // member "get_time"
///
///     #[beckon(skip)]
///     fn checkpoint(&self) -> Snapshot { ... }          // not a member
/// }
/// ```
#[proc_macro_attribute]
pub fn methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    let _ = parse_macro_input!(attr as Nothing);
    let mut input = parse_macro_input!(item as ItemImpl);

    if let Some((_, path, _)) = &input.trait_ {
        return syn::Error::new_spanned(
            path,
            "#[methods] goes on inherent impl blocks, not trait impls",
        )
        .to_compile_error()
        .into();
    }
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[methods] does not support generic impl blocks",
        )
        .to_compile_error()
        .into();
    }

    let self_ty = input.self_ty.clone();

    let mut registrations: Vec<proc_macro2::TokenStream> = Vec::new();
    for item in &mut input.items {
        let ImplItem::Fn(func) = item else { continue };

        match take_skip_attr(&mut func.attrs) {
            Ok(true) => continue,
            Ok(false) => {}
            Err(err) => return err.to_compile_error().into(),
        }

        let Some(receiver) = func.sig.receiver() else {
            // Constructors and other associated functions are not members.
            continue;
        };
        if receiver.reference.is_none() || receiver.mutability.is_some() {
            return syn::Error::new_spanned(
                receiver,
                "#[methods] members must take `&self`; use interior mutability or #[beckon(skip)]",
            )
            .to_compile_error()
            .into();
        }
        if func.sig.asyncness.is_some() {
            return syn::Error::new_spanned(
                &func.sig.fn_token,
                "#[methods] members must be synchronous",
            )
            .to_compile_error()
            .into();
        }
        if !func.sig.generics.params.is_empty() {
            return syn::Error::new_spanned(
                &func.sig.generics,
                "#[methods] members cannot be generic; mark them #[beckon(skip)]",
            )
            .to_compile_error()
            .into();
        }

        let ident = func.sig.ident.clone();
        let name = LitStr::new(&ident.to_string(), ident.span());
        registrations.push(quote! {
            let builder = builder
                .register_fn(#name, <#self_ty>::#ident)
                .expect("method names within an impl block are unique");
        });
    }

    let expanded = quote! {
        #input

        impl ::beckon::Reflect for #self_ty {
            type Methods = ::beckon::MethodTable<Self>;

            fn methods(&self) -> &Self::Methods {
                static TABLE: ::std::sync::LazyLock<::beckon::MethodTable<#self_ty>> =
                    ::std::sync::LazyLock::new(|| {
                        let builder = ::beckon::MethodTable::<#self_ty>::builder();
                        #(#registrations)*
                        builder.build()
                    });
                &TABLE
            }
        }
    };

    TokenStream::from(expanded)
}

fn take_skip_attr(attrs: &mut Vec<Attribute>) -> syn::Result<bool> {
    let mut skip = false;
    let mut parse_err = None;

    attrs.retain(|attr| {
        if !attr.path().is_ident("beckon") {
            return true;
        }
        match attr.parse_args::<Ident>() {
            Ok(ident) if ident == "skip" => skip = true,
            Ok(ident) => {
                parse_err = Some(syn::Error::new(
                    ident.span(),
                    format!("unknown beckon attribute: {}", ident),
                ));
            }
            Err(err) => parse_err = Some(err),
        }
        false
    });

    match parse_err {
        Some(err) => Err(err),
        None => Ok(skip),
    }
}
