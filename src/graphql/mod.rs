// 商品目录的只读 GraphQL 查询，与 REST 的 list/get 等价

use std::sync::Arc;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ID, Object, Schema, http::GraphiQLSource,
};
use axum::{
    extract::{Json, State},
    response::Html,
};

use crate::{AppState, database::ProductStore, models::Product};

pub type ProductSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(products: Arc<ProductStore>) -> ProductSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(products)
        .finish()
}

pub struct ProductNode(Product);

#[Object(name = "Product")]
impl ProductNode {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn price(&self) -> f64 {
        self.0.price
    }

    async fn description(&self) -> Option<&str> {
        Some(self.0.description.as_str())
    }

    async fn categories(&self) -> Option<Vec<String>> {
        Some(self.0.categories.clone())
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn products(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<ProductNode>> {
        let store = ctx.data::<Arc<ProductStore>>()?;
        Ok(store.list().await?.into_iter().map(ProductNode).collect())
    }

    async fn product(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<ProductNode>> {
        // 非整数 id 与不存在的 id 一样返回 null
        let Ok(id) = id.0.parse::<i64>() else {
            return Ok(None);
        };
        let store = ctx.data::<Arc<ProductStore>>()?;
        Ok(store.get(id).await?.map(ProductNode))
    }
}

pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
