use crate::{Error, Result};

/// Looks for a hand-written `fn table_name` for `record` among `items`.
///
/// Any `impl` block whose self type is `record` or `&record` counts, with
/// either receiver form (`self`, `self: Self`, `&self`, `self: &Self`). The
/// body has to be a single string literal, optionally written as
/// `return "..";`.
///
/// An inherent `fn table_name` in any other form (no receiver, or a receiver
/// such as `self: Box<Self>`) would clash with the generated method, so it is
/// rejected.
pub(crate) fn declared(items: &[syn::Item], record: &str) -> Result<Option<String>> {
    for item in items {
        let syn::Item::Impl(item) = item else {
            continue;
        };

        if !is_record(&item.self_ty, record) {
            continue;
        }

        for impl_item in &item.items {
            let syn::ImplItem::Fn(method) = impl_item else {
                continue;
            };

            if method.sig.ident != "table_name" {
                continue;
            }

            let readable = method
                .sig
                .receiver()
                .is_some_and(|receiver| is_self_receiver(&receiver.ty));

            if !readable {
                if item.trait_.is_none() {
                    return Err(Error::invalid_table_name(record));
                }
                continue;
            }

            return match literal_body(&method.block) {
                Some(lit) => Ok(Some(lit.value())),
                None => Err(Error::invalid_table_name(record)),
            };
        }
    }

    Ok(None)
}

fn is_record(ty: &syn::Type, record: &str) -> bool {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == record && segment.arguments.is_none()),
        syn::Type::Reference(reference) => is_record(&reference.elem, record),
        syn::Type::Paren(paren) => is_record(&paren.elem, record),
        syn::Type::Group(group) => is_record(&group.elem, record),
        _ => false,
    }
}

fn is_self_receiver(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => path.qself.is_none() && path.path.is_ident("Self"),
        syn::Type::Reference(reference) => is_self_receiver(&reference.elem),
        _ => false,
    }
}

fn literal_body(block: &syn::Block) -> Option<&syn::LitStr> {
    let [stmt] = block.stmts.as_slice() else {
        return None;
    };

    let syn::Stmt::Expr(expr, _) = stmt else {
        return None;
    };

    match expr {
        syn::Expr::Return(ret) => ret.expr.as_deref().and_then(lit_str),
        expr => lit_str(expr),
    }
}

fn lit_str(expr: &syn::Expr) -> Option<&syn::LitStr> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(lit),
            ..
        }) => Some(lit),
        syn::Expr::Paren(paren) => lit_str(&paren.expr),
        syn::Expr::Group(group) => lit_str(&group.expr),
        _ => None,
    }
}
