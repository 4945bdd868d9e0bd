//! Pipeline contract tests.
//!
//! Validates stage ordering, the provider-conditional chat normalization,
//! and the loud not-implemented defaults of every kind-level base pipeline.

use std::sync::Mutex;

use async_trait::async_trait;
use modelgate::types::{
    ChatModelParams, ChatOutput, EmbeddingOutput, EmbeddingParams, GatewayResponse,
    ImageEditParams, ImageGenerationParams, ImageOutput, ResponseBody, TranscriptionOutput,
    TranscriptionParams,
};
use modelgate::types::{ChatMessage, GatewayParams, Provider};
use modelgate::{
    ChatService, EmbeddingService, ExceptionKind, ImageEditService, ImageGenerationService,
    LangException, ModelService, RequestContext, TranscriptionService, run_pipeline,
};

fn chat_context(provider: Provider) -> RequestContext {
    RequestContext::new(
        serde_json::json!({
            "model": "test-model",
            "input": [
                {"role": "system", "content": "be terse"},
                {"role": "user", "content": "hi"}
            ]
        }),
        GatewayParams::new(provider),
    )
}

/// Stub adapter supplying the required stages and recording the order in
/// which they run. Stage 2 delegates to the chat base pipeline.
struct RecordingChatAdapter {
    stages: Mutex<Vec<&'static str>>,
}

impl RecordingChatAdapter {
    fn new() -> Self {
        Self {
            stages: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, stage: &'static str) {
        self.stages.lock().unwrap().push(stage);
    }
}

#[async_trait]
impl ModelService for RecordingChatAdapter {
    type Params = ChatModelParams;
    type Output = ChatOutput;

    async fn prepare_model_params(
        &self,
        ctx: &RequestContext,
    ) -> Result<ChatModelParams, LangException> {
        self.record("prepare");
        serde_json::from_value(ctx.body().clone())
            .map_err(|e| LangException::validation(e.to_string()))
    }

    async fn ready_for_model(
        &self,
        ctx: &RequestContext,
        params: ChatModelParams,
    ) -> Result<ChatModelParams, LangException> {
        self.record("ready");
        ChatService.ready_for_model(ctx, params).await
    }

    async fn execute_model(
        &self,
        _ctx: &RequestContext,
        params: ChatModelParams,
    ) -> Result<ChatOutput, LangException> {
        self.record("execute");
        let last = params
            .input
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        Ok(ChatOutput::Text(format!("echo: {last}")))
    }

    async fn deliver_output(
        &self,
        _ctx: &RequestContext,
        output: ChatOutput,
    ) -> Result<GatewayResponse, LangException> {
        self.record("deliver");
        match output {
            ChatOutput::Text(text) => {
                Ok(GatewayResponse::json(serde_json::json!({"output": text})))
            }
            other => Err(LangException::provider(format!(
                "unexpected output shape: {other:?}"
            ))),
        }
    }
}

#[tokio::test]
async fn all_four_stages_run_in_order_and_yield_one_response() {
    let adapter = RecordingChatAdapter::new();
    let ctx = chat_context(Provider::OpenAi);

    let response = run_pipeline(&adapter, &ctx).await.unwrap();
    assert_eq!(response.status, 200);
    match response.body {
        ResponseBody::Json(value) => assert_eq!(value["output"], "echo: hi"),
        other => panic!("expected JSON body, got {other:?}"),
    }
    assert_eq!(
        *adapter.stages.lock().unwrap(),
        vec!["prepare", "ready", "execute", "deliver"]
    );
}

#[tokio::test]
async fn stage_failure_aborts_remaining_stages() {
    struct FailingExecute(Mutex<Vec<&'static str>>);

    #[async_trait]
    impl ModelService for FailingExecute {
        type Params = ChatModelParams;
        type Output = ChatOutput;

        async fn prepare_model_params(
            &self,
            _ctx: &RequestContext,
        ) -> Result<ChatModelParams, LangException> {
            self.0.lock().unwrap().push("prepare");
            Ok(ChatModelParams::default())
        }

        async fn execute_model(
            &self,
            _ctx: &RequestContext,
            _params: ChatModelParams,
        ) -> Result<ChatOutput, LangException> {
            self.0.lock().unwrap().push("execute");
            Err(LangException::provider("upstream rejected the request"))
        }

        async fn deliver_output(
            &self,
            _ctx: &RequestContext,
            _output: ChatOutput,
        ) -> Result<GatewayResponse, LangException> {
            self.0.lock().unwrap().push("deliver");
            Ok(GatewayResponse::json(serde_json::json!({})))
        }
    }

    let adapter = FailingExecute(Mutex::new(Vec::new()));
    let ctx = chat_context(Provider::OpenAi);

    let err = run_pipeline(&adapter, &ctx).await.unwrap_err();
    assert_eq!(err.kind(), ExceptionKind::Provider);
    // Stage 4 never ran.
    assert_eq!(*adapter.0.lock().unwrap(), vec!["prepare", "execute"]);
}

#[tokio::test]
async fn hub_provider_strips_system_messages_preserving_order() {
    let ctx = chat_context(Provider::HuggingfaceHub);
    let params = ChatModelParams {
        input: vec![
            ChatMessage::system("be terse"),
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
            ChatMessage::user("bye"),
        ],
        ..Default::default()
    };

    let ready = ChatService.ready_for_model(&ctx, params).await.unwrap();
    assert_eq!(
        ready.input,
        vec![
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
            ChatMessage::user("bye"),
        ]
    );
}

#[tokio::test]
async fn other_providers_pass_messages_through_unchanged() {
    for provider in [
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::Google,
        Provider::Ollama,
    ] {
        let ctx = chat_context(provider);
        let input = vec![ChatMessage::system("be terse"), ChatMessage::user("hi")];
        let params = ChatModelParams {
            input: input.clone(),
            ..Default::default()
        };

        let ready = ChatService.ready_for_model(&ctx, params).await.unwrap();
        assert_eq!(ready.input, input, "provider {provider:?} mutated input");
    }
}

#[tokio::test]
async fn ready_for_model_is_idempotent() {
    let ctx = chat_context(Provider::HuggingfaceHub);
    let params = ChatModelParams {
        input: vec![ChatMessage::system("be terse"), ChatMessage::user("hi")],
        ..Default::default()
    };

    let once = ChatService.ready_for_model(&ctx, params).await.unwrap();
    let expected = once.input.clone();
    let twice = ChatService.ready_for_model(&ctx, once).await.unwrap();
    assert_eq!(twice.input, expected);
}

fn assert_not_implemented(result: Result<impl std::fmt::Debug, LangException>) {
    match result {
        Err(e) => assert_eq!(e.kind(), ExceptionKind::NotImplemented),
        Ok(v) => panic!("expected not-implemented failure, got {v:?}"),
    }
}

#[tokio::test]
async fn base_pipelines_fail_loudly_on_unimplemented_stages() {
    let ctx = chat_context(Provider::OpenAi);

    assert_not_implemented(ChatService.prepare_model_params(&ctx).await);
    assert_not_implemented(
        ChatService
            .execute_model(&ctx, ChatModelParams::default())
            .await,
    );
    assert_not_implemented(
        ChatService
            .deliver_output(&ctx, ChatOutput::Text(String::new()))
            .await,
    );

    assert_not_implemented(TranscriptionService.prepare_model_params(&ctx).await);
    assert_not_implemented(
        TranscriptionService
            .execute_model(&ctx, TranscriptionParams::default())
            .await,
    );
    assert_not_implemented(
        TranscriptionService
            .deliver_output(&ctx, TranscriptionOutput::Plain(serde_json::json!({})))
            .await,
    );

    assert_not_implemented(ImageEditService.prepare_model_params(&ctx).await);
    assert_not_implemented(
        ImageEditService
            .execute_model(&ctx, ImageEditParams::default())
            .await,
    );
    assert_not_implemented(
        ImageEditService
            .deliver_output(&ctx, ImageOutput::Url(String::new()))
            .await,
    );

    assert_not_implemented(ImageGenerationService.prepare_model_params(&ctx).await);
    assert_not_implemented(
        ImageGenerationService
            .execute_model(&ctx, ImageGenerationParams::default())
            .await,
    );
    assert_not_implemented(
        ImageGenerationService
            .deliver_output(&ctx, ImageOutput::Url(String::new()))
            .await,
    );

    assert_not_implemented(EmbeddingService.prepare_model_params(&ctx).await);
    assert_not_implemented(
        EmbeddingService
            .execute_model(&ctx, EmbeddingParams::default())
            .await,
    );
    assert_not_implemented(
        EmbeddingService
            .deliver_output(&ctx, EmbeddingOutput::Vector(Vec::new()))
            .await,
    );
}

#[tokio::test]
async fn non_chat_bases_default_stage_two_to_identity() {
    let ctx = chat_context(Provider::HuggingfaceHub);

    let params = EmbeddingParams::default();
    let ready = EmbeddingService.ready_for_model(&ctx, params).await.unwrap();
    assert_eq!(ready.input, Default::default());

    let params = TranscriptionParams {
        language: Some("en".to_string()),
        ..Default::default()
    };
    let ready = TranscriptionService
        .ready_for_model(&ctx, params)
        .await
        .unwrap();
    assert_eq!(ready.language.as_deref(), Some("en"));
}
