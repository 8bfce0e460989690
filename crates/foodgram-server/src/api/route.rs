use actix_web::{Scope, web};

pub fn routes(context_path: &str) -> Scope {
    web::scope(&format!("/{}", context_path.trim_matches('/')))
        .service(super::recipe::download_shopping_cart)
        .service(super::recipe::add_to_shopping_cart)
        .service(super::recipe::remove_from_shopping_cart)
        .service(super::recipe::add_to_favorites)
        .service(super::recipe::remove_from_favorites)
        .service(super::ingredient::list)
        .service(super::ingredient::detail)
        .service(super::tag::list)
        .service(super::tag::detail)
}
