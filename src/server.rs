//! Local HTTP hosting for the handler, for running outside a serverless platform.

use actix_web::{
    http::StatusCode,
    web::{self, Bytes, Data},
    App, HttpRequest, HttpResponse, HttpServer,
};
use std::io;

use crate::{
    config::Config,
    handler::BouquetHandler,
    models::{Request, Response},
};

async fn dispatch(req: HttpRequest, body: Bytes, handler: Data<BouquetHandler>) -> HttpResponse {
    let request = Request::new(
        req.method().as_str(),
        Some(String::from_utf8_lossy(&body).into_owned()),
    );
    into_http_response(handler.handle(request).await)
}

pub fn into_http_response(response: Response) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }
    builder.body(response.body)
}

/// Serves every path and method with the handler. Configuration is read once, at startup.
pub async fn serve(config: Config) -> io::Result<()> {
    let handler = BouquetHandler::from_config(config.openai.clone())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let handler = Data::new(handler);
    let port = config.port();

    log::info!("🌐 Listening on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(handler.clone())
            .default_service(web::to(dispatch))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpenAiConfig;
    use actix_web::{http::Method, test};

    #[actix_web::test]
    async fn test_requests_reach_handler() {
        let handler = BouquetHandler::from_config(OpenAiConfig::new()).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(handler))
                .default_service(web::to(dispatch)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("Access-Control-Max-Age")
                .and_then(|v| v.to_str().ok()),
            Some("86400")
        );

        let req = test::TestRequest::get().uri("/generate").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let req = test::TestRequest::post()
            .uri("/generate")
            .set_payload(r#"{"prompt":"red roses"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], br#"{"error":"OpenAI API key not configured"}"#);
    }
}
