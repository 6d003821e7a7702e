//! Landing page: every product in the collection, newest first.

use common::model::product::StoredProduct;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::format_date;
use crate::services::products::fetch_products;

pub enum Msg {
    Loaded(Result<Vec<StoredProduct>, String>),
}

pub struct ProductListComponent {
    products: Option<Result<Vec<StoredProduct>, String>>,
}

impl Component for ProductListComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(fetch_products().await));
        });
        Self { products: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                if let Err(e) = &result {
                    gloo_console::error!(format!("cannot load products: {}", e));
                }
                self.products = Some(result);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.products {
            None => html! { <p style="text-align:center;">{"Cargando..."}</p> },
            Some(Err(e)) => html! { <p style="text-align:center;color:red;">{ format!("Error: {}", e) }</p> },
            Some(Ok(products)) if products.is_empty() => {
                html! { <p style="text-align:center;">{"Todavía no hay productos."}</p> }
            }
            Some(Ok(products)) => html! {
                <ul style="list-style:none;max-width:1200px;margin:2rem auto;padding:0;">
                    { for products.iter().map(product_item) }
                </ul>
            },
        }
    }
}

fn product_item(stored: &StoredProduct) -> Html {
    let product = &stored.product;
    html! {
        <li key={stored.id.clone()} style="display:flex;gap:2rem;padding:2rem 0;border-bottom:1px solid #e1e1e1;">
            {
                if product.image_url.is_empty() {
                    html! { <div style="width:200px;height:150px;background:#f3f3f3;" /> }
                } else {
                    html! { <img src={product.image_url.clone()} alt={product.name.clone()} style="width:200px;" /> }
                }
            }
            <div>
                <a href={product.source_url.clone()} style="font-size:2rem;font-weight:700;">{ product.name.clone() }</a>
                <p>{ product.description.clone() }</p>
                <p style="color:#888;">
                    { format!("{} · por {} · {}", product.company, product.creator.display_name, format_date(product.created_at)) }
                </p>
                <p>{ format!("{} votos · {} comentarios", product.vote_count, product.comments.len()) }</p>
            </div>
        </li>
    }
}
