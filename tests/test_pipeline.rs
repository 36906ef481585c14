use fridge_chef::{
    FridgeItem, GenerationError, OpenAIProvider, Recipe, RecipePipeline, RecipeSession,
    UserProfile,
};
use mockito::{Matcher, Server};
use serde_json::json;

const PILAV_REPLY: &str = "Başlık: Tavuklu Pilav, Malzemeler: tavuk, pirinç, soğan\nTarif: Soğanı kavur, tavuğu ekle, pirinci ekle ve pişir.";

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn pipeline_for(server: &Server) -> RecipePipeline {
    RecipePipeline::new(Box::new(OpenAIProvider::with_endpoint(
        "test_key".to_string(),
        format!("{}/v1/chat/completions", server.url()),
        "gpt-4o-mini".to_string(),
    )))
}

#[tokio::test]
async fn test_generate_end_to_end() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(PILAV_REPLY))
        .expect(1)
        .create_async()
        .await;

    let recipe = pipeline_for(&server)
        .generate(
            "tavuk (500 g), pirinç (2 su bardağı), soğan (1 adet)",
            "",
            &[],
            &[],
        )
        .await
        .unwrap();

    assert_eq!(
        recipe,
        Recipe {
            title: "Tavuklu Pilav".to_string(),
            ingredients: vec![
                "tavuk".to_string(),
                "pirinç".to_string(),
                "soğan".to_string()
            ],
            instructions: "Soğanı kavur, tavuğu ekle, pirinci ekle ve pişir.".to_string(),
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_fails_without_recipe() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
        .expect(1)
        .create_async()
        .await;

    let result = pipeline_for(&server)
        .generate("süt (1 L)", "", &[], &[])
        .await;

    match result {
        Err(GenerationError::Http { status }) => assert_eq!(status, 401),
        other => panic!("expected HTTP error, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_success_is_format_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"role": "assistant"}}]}"#)
        .create_async()
        .await;

    let result = pipeline_for(&server)
        .generate("süt (1 L)", "", &[], &[])
        .await;

    assert!(matches!(result, Err(GenerationError::Format(_))));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_error() {
    // Take a free port, then release it so nothing is listening there.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let pipeline = RecipePipeline::new(Box::new(OpenAIProvider::with_endpoint(
        "test_key".to_string(),
        format!("http://{addr}/v1/chat/completions"),
        "gpt-4o-mini".to_string(),
    )));

    let result = pipeline.generate("süt (1 L)", "", &[], &[]).await;
    assert!(matches!(result, Err(GenerationError::Request(_))));
}

#[tokio::test]
async fn test_prompt_carries_profile_constraints() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Alerjilerim: peanuts, shellfish\\. ".to_string()),
            Matcher::Regex("Diyet tercihlerim: vegetarian\\. ".to_string()),
            Matcher::Regex("mantar \\(250 g\\), ıspanak \\(1 demet\\)".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "Başlık: Mantarlı Ispanak\nMalzemeler: mantar, ıspanak\nTarif: Soteleyin.",
        ))
        .create_async()
        .await;

    let session = RecipeSession::new("user-7", pipeline_for(&server));
    let items = vec![
        FridgeItem::new("mantar", "250 g"),
        FridgeItem::new("ıspanak", "1 demet"),
    ];
    let profile = UserProfile {
        allergies: vec!["peanuts".to_string()],
        other_allergies: "shellfish".to_string(),
        diet_preferences: vec!["vegetarian".to_string()],
    };

    let saved = session
        .generate_for_fridge(&items, "", &profile)
        .await
        .unwrap();

    assert_eq!(saved.user_id, "user-7");
    assert_eq!(saved.title, "Mantarlı Ispanak");
    assert_eq!(saved.ingredients, vec!["mantar", "ıspanak"]);
    assert_eq!(saved.instructions, "Soteleyin.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_session_empty_fridge_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let session = RecipeSession::new("user-1", pipeline_for(&server));
    let result = session
        .generate_for_fridge(&[], "bir şeyler", &UserProfile::default())
        .await;

    assert!(matches!(result, Err(GenerationError::EmptyFridge)));
    mock.assert_async().await;
}
