//! Integration tests per il form di contatto
//!
//! Il percorso completo: validazione, archiviazione della richiesta,
//! notifica email alla casella della ditta. Il mailer registrato nei test
//! cattura i messaggi; la variante che fallisce esercita il 500 opaco.

mod common;

#[cfg(test)]
mod contact_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    fn valid_form() -> Value {
        json!({
            "name": "Lucia Ricci",
            "email": "lucia@example.com",
            "phone": "+39 055 123456",
            "message": "Cerco un tavolo allungabile in rovere per otto persone."
        })
    }

    #[tokio::test]
    async fn test_contact_success_stores_and_notifies() {
        let ctx = create_test_context();
        let server = create_test_server(ctx.state.clone());

        let response = server.post("/contact").json(&valid_form()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);

        // la richiesta è stata archiviata
        assert_eq!(ctx.inquiries.count(), 1);

        // e notificata alla casella della ditta
        let sent = ctx.outbox.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, TEST_CONTACT_INBOX);
        assert!(sent[0].subject.contains("Lucia Ricci"));
        assert!(sent[0].text.contains("tavolo allungabile"));
        assert!(sent[0].text.contains("lucia@example.com"));
        assert!(sent[0].html.is_some());
    }

    #[tokio::test]
    async fn test_contact_without_phone() {
        let ctx = create_test_context();
        let server = create_test_server(ctx.state.clone());

        let response = server
            .post("/contact")
            .json(&json!({
                "name": "Paolo Bianchi",
                "email": "paolo@example.com",
                "message": "Avete camere da letto in noce?"
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(ctx.outbox.sent_messages().len(), 1);
    }

    #[tokio::test]
    async fn test_contact_invalid_email() {
        let ctx = create_test_context();
        let server = create_test_server(ctx.state.clone());

        let mut form = valid_form();
        form["email"] = json!("not-an-email");
        let response = server.post("/contact").json(&form).await;

        response.assert_status_bad_request();
        // niente archiviazione e niente email per un form invalido
        assert_eq!(ctx.inquiries.count(), 0);
        assert!(ctx.outbox.sent_messages().is_empty());
    }

    #[tokio::test]
    async fn test_contact_message_too_short() {
        let ctx = create_test_context();
        let server = create_test_server(ctx.state.clone());

        let mut form = valid_form();
        form["message"] = json!("ciao");
        let response = server.post("/contact").json(&form).await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_contact_bad_phone() {
        let ctx = create_test_context();
        let server = create_test_server(ctx.state.clone());

        let mut form = valid_form();
        form["phone"] = json!("chiamami tu");
        let response = server.post("/contact").json(&form).await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_contact_missing_fields() {
        let ctx = create_test_context();
        let server = create_test_server(ctx.state.clone());

        let response = server.post("/contact").json(&json!({})).await;

        response.assert_status_unprocessable_entity();
    }

    #[tokio::test]
    async fn test_contact_mail_failure_is_opaque_500() {
        let ctx = create_test_context_with_failing_mailer();
        let server = create_test_server(ctx.state.clone());

        let response = server.post("/contact").json(&valid_form()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Server error");

        // la richiesta resta archiviata anche se la notifica è fallita
        assert_eq!(ctx.inquiries.count(), 1);
    }
}
