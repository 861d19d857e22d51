//! Integration tests for the typed endpoint clients over a mock backend

use std::sync::Arc;

use ragdesk_api::{
    ConversationApi, ConversationCreate, KnowledgeApi, KnowledgeFileApi, KnowledgeFileListQuery,
    KnowledgeListQuery, ModelCfgApi, ModelCfgCreate,
};
use ragdesk_http::FilePart;
use ragdesk_http::{Gateway, GatewayConfig, GatewayError, GatewayTrait, MemoryNotifier};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn apis(server: &MockServer) -> (Arc<dyn GatewayTrait>, MemoryNotifier) {
    let notifier = MemoryNotifier::new();
    let gateway = Gateway::with_notifier(
        GatewayConfig::new(server.uri()),
        Arc::new(notifier.clone()),
    )
    .expect("gateway construction failed");
    (Arc::new(gateway), notifier)
}

#[tokio::test]
async fn knowledge_list_sends_pagination_and_decodes_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/knowledge/list"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "data": [
                {"id": "k1", "name": "docs"},
                {"id": "k2", "name": "faq"}
            ]
        })))
        .mount(&server)
        .await;

    let (gateway, notifier) = apis(&server);
    let api = KnowledgeApi::new(gateway);

    let response = api
        .list(KnowledgeListQuery {
            name: None,
            page: Some(1),
            size: Some(10),
        })
        .await
        .unwrap();

    #[derive(serde::Deserialize)]
    struct Kb {
        id: String,
        name: String,
    }
    let items: Vec<Kb> = response.data_as().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "k1");
    assert_eq!(items[1].name, "faq");
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn knowledge_create_posts_exact_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/knowledge/create"))
        .and(body_json(json!({"name": "docs", "desc": "product docs"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "data": {"id": "k1"}
        })))
        .mount(&server)
        .await;

    let (gateway, _) = apis(&server);
    let api = KnowledgeApi::new(gateway);

    let response = api
        .create(ragdesk_api::KnowledgeCreate {
            name: "docs".to_string(),
            desc: Some("product docs".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.data().unwrap()["id"], "k1");
}

#[tokio::test]
async fn conversation_create_round_trips_through_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/conversation/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "data": {"conv_id": "c42"}
        })))
        .mount(&server)
        .await;

    let (gateway, notifier) = apis(&server);
    let api = ConversationApi::new(gateway);

    let response = api
        .create(ConversationCreate {
            available_model_id: "m1".to_string(),
            system_prompt: "be brief".to_string(),
            temperature: 0.3,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.data().unwrap()["conv_id"], "c42");
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn business_failure_surfaces_through_typed_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sys/model_setting_cfg/delete"))
        .and(query_param("id", "cfg-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 404,
            "status_message": "cfg not found"
        })))
        .mount(&server)
        .await;

    let (gateway, notifier) = apis(&server);
    let api = ModelCfgApi::new(gateway);

    let err = api.delete("cfg-9").await.unwrap_err();
    assert!(matches!(err, GatewayError::Business { ref message } if message == "cfg not found"));
    // The gateway already displayed it; the API layer must not add another.
    assert_eq!(notifier.messages(), vec!["cfg not found"]);
}

#[tokio::test]
async fn model_cfg_create_and_providers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sys/model_setting_cfg/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "data": ["openai", "ollama"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sys/model_setting_cfg/create"))
        .and(body_json(json!({
            "provider_id": "ollama",
            "api_key": "sk-test",
            "base_url": "http://localhost:11434"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "data": {"id": "cfg-1"}
        })))
        .mount(&server)
        .await;

    let (gateway, _) = apis(&server);
    let api = ModelCfgApi::new(gateway);

    let providers: Vec<String> = api.list_providers().await.unwrap().data_as().unwrap();
    assert_eq!(providers, vec!["openai", "ollama"]);

    let created = api
        .create(ModelCfgCreate {
            provider_id: "ollama".to_string(),
            api_key: "sk-test".to_string(),
            base_url: "http://localhost:11434".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.data().unwrap()["id"], "cfg-1");
}

#[tokio::test]
async fn knowledge_file_upload_and_listing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/knowledge_file/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "data": {"object_name": "kb/handbook.pdf"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/knowledge_file/list"))
        .and(query_param("kb_id", "k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "data": [{"id": "f1", "object_name": "kb/handbook.pdf"}]
        })))
        .mount(&server)
        .await;

    let (gateway, notifier) = apis(&server);
    let api = KnowledgeFileApi::new(gateway);

    let uploaded = api
        .upload(FilePart::new(
            "handbook.pdf",
            vec![0x25, 0x50, 0x44, 0x46],
            "application/pdf",
        ))
        .await
        .unwrap();
    assert_eq!(uploaded.data().unwrap()["object_name"], "kb/handbook.pdf");

    let files = api
        .list(KnowledgeFileListQuery {
            kb_id: "k1".to_string(),
            page: None,
            size: None,
        })
        .await
        .unwrap();
    assert_eq!(files.data().unwrap()[0]["id"], "f1");
    assert!(notifier.is_empty());
}
