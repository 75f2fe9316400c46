use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_rocket::{GraphQLRequest, GraphQLResponse};
use rocket::{response::content::RawHtml, Build, Rocket, State};

mod auth;
mod context;
mod errors;
mod schema;
mod types;

pub use auth::AuthorizedUser;
pub use context::{Context, ContextState};
pub use schema::{build_schema, ApiSchema};

const GRAPHQL_ENDPOINT: &str = "/graphql";

#[get("/")]
fn graphiql() -> RawHtml<String> {
    RawHtml(GraphiQLSource::build().endpoint(GRAPHQL_ENDPOINT).finish())
}

/// Executes a GraphQL request. A missing or invalid token does not reject the
/// request; resolvers that need a caller report it themselves.
#[post("/graphql", data = "<request>", format = "application/json")]
async fn graphql_request(
    schema: &State<ApiSchema>,
    user: Option<AuthorizedUser>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = match user {
        Some(user) => request.data(user),
        None => request,
    };

    request.execute(schema.inner()).await
}

/// Creates [`Rocket`] object that serves the GraphQL API using the provided context.
pub fn initialize_api(context: Arc<Context>) -> Rocket<Build> {
    let schema = build_schema(context.clone());

    rocket::build()
        .manage(context)
        .manage(schema)
        .mount("/", routes![graphiql, graphql_request])
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Header},
        local::asynchronous::Client,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        app::tokens::{TokenIssuer, SESSION_TTL},
        create_context, create_inmemory_repositories,
    };

    async fn client() -> Client {
        let tokens = TokenIssuer::new("secreta", SESSION_TTL);
        let context = Arc::new(create_context(create_inmemory_repositories(), tokens));

        Client::tracked(initialize_api(context)).await.unwrap()
    }

    async fn post(client: &Client, token: Option<&str>, query: &str) -> Value {
        let mut request = client
            .post(GRAPHQL_ENDPOINT)
            .header(ContentType::JSON)
            .body(json!({ "query": query }).to_string());
        if let Some(token) = token {
            request = request.header(Header::new("Authorization", format!("Bearer {}", token)));
        }

        let body = request.dispatch().await.into_string().await.unwrap();
        serde_json::from_str(&body).unwrap()
    }

    #[rocket::async_test]
    async fn bearer_token_identifies_the_caller() {
        let client = client().await;
        post(
            &client,
            None,
            r#"mutation { crearUsuario(input: {nombre: "Ana", email: "a@x.com", password: "secret"}) }"#,
        )
        .await;
        let login = post(
            &client,
            None,
            r#"mutation { autenticarUsuario(input: {email: "a@x.com", password: "secret"}) { token } }"#,
        )
        .await;
        let token = login["data"]["autenticarUsuario"]["token"].as_str().unwrap();

        let created = post(
            &client,
            Some(token),
            r#"mutation { nuevoProyecto(input: {nombre: "Tienda"}) { nombre } }"#,
        )
        .await;
        let listed = post(&client, Some(token), "{ obtenerProyectos { nombre } }").await;

        assert_eq!(created["data"]["nuevoProyecto"]["nombre"], "Tienda");
        assert_eq!(listed["data"]["obtenerProyectos"], json!([{ "nombre": "Tienda" }]));
    }

    #[rocket::async_test]
    async fn missing_or_forged_token_is_unauthenticated() {
        let client = client().await;

        let anonymous = post(&client, None, "{ obtenerProyectos { id } }").await;
        let forged = post(&client, Some("abc.def.ghi"), "{ obtenerProyectos { id } }").await;

        assert_eq!(anonymous["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
        assert_eq!(forged["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
    }

    #[rocket::async_test]
    async fn graphiql_is_served_at_the_root() {
        let client = client().await;

        let page = client.get("/").dispatch().await.into_string().await.unwrap();

        assert!(page.contains("graphiql"));
    }
}
