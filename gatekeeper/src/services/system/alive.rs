use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// Health check: anything that can run this handler is alive.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(json!({"alive": "yes"}))
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn reports_alive_and_stays_identical_across_calls() {
        let app = test::init_service(App::new().service(configure_routes())).await;

        let first = test::call_service(&app, test::TestRequest::get().uri("/x/alive").to_request())
            .await;
        assert!(first.status().is_success());
        let first_body = test::read_body(first).await;
        assert_eq!(first_body, r#"{"alive":"yes"}"#.as_bytes());

        let second =
            test::call_service(&app, test::TestRequest::get().uri("/x/alive").to_request()).await;
        let second_body = test::read_body(second).await;
        assert_eq!(first_body, second_body);
    }
}
