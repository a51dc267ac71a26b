use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;

#[tokio::test]
async fn answer_page_shows_rendered_markdown() {
    let app = common::spawn_app().await;
    Mock::given(method("POST"))
        .and(path(app.gemini_path()))
        .and(header("x-goog-api-key", common::TEST_API_KEY))
        .and(body_string_contains("User Query: What is inflation?"))
        .and(body_string_contains("You are a financial expert."))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::gemini_reply("**X**")),
        )
        .expect(1)
        .mount(&app.gemini_server)
        .await;

    let response = app
        .post_form("/gemini_reply", &[("q", "What is inflation?")])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<strong>X</strong>"), "{}", body);
    app.gemini_server.verify().await;
}

#[tokio::test]
async fn code_blocks_in_answers_are_highlightable() {
    let app = common::spawn_app().await;
    Mock::given(method("POST"))
        .and(path(app.gemini_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::gemini_reply(
            "Compound interest:\n\n```python\nbalance = p * (1 + r) ** n\n```\n",
        )))
        .mount(&app.gemini_server)
        .await;

    let body = app
        .post_form("/gemini_reply", &[("q", "Show me compound interest in code")])
        .await
        .text()
        .await
        .unwrap();

    assert!(body.contains(r#"<div class="codehilite"><pre><code class="language-python">"#));
}

#[tokio::test]
async fn answer_without_text_renders_empty() {
    let app = common::spawn_app().await;
    Mock::given(method("POST"))
        .and(path(app.gemini_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&app.gemini_server)
        .await;

    let response = app.post_form("/gemini_reply", &[("q", "Anything?")]).await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains(r#"<div class="answer">"#));
}

#[tokio::test]
async fn long_question_reaches_generation_api_intact() {
    let app = common::spawn_app().await;
    let question = "Should I rebalance my index fund portfolio? ".repeat(480);
    assert!(question.len() > 20 * 1024);
    Mock::given(method("POST"))
        .and(path(app.gemini_path()))
        .and(body_string_contains(format!("User Query: {}", question)))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::gemini_reply("Yes")))
        .expect(1)
        .mount(&app.gemini_server)
        .await;

    let response = app.post_form("/gemini_reply", &[("q", &question)]).await;

    assert_eq!(response.status().as_u16(), 200);
    app.gemini_server.verify().await;
}

#[tokio::test]
async fn missing_question_is_sent_as_empty() {
    let app = common::spawn_app().await;
    Mock::given(method("POST"))
        .and(path(app.gemini_path()))
        .and(body_string_contains("User Query: \""))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::gemini_reply("ok")))
        .expect(1)
        .mount(&app.gemini_server)
        .await;

    let response = app.get("/gemini_reply").await;

    assert_eq!(response.status().as_u16(), 200);
    app.gemini_server.verify().await;
}

#[tokio::test]
async fn generation_failure_is_internal_error() {
    let app = common::spawn_app().await;
    Mock::given(method("POST"))
        .and(path(app.gemini_path()))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.gemini_server)
        .await;

    let response = app.post_form("/gemini_reply", &[("q", "Rates?")]).await;

    assert_eq!(response.status().as_u16(), 500);
    app.gemini_server.verify().await;
}
