//! Mock chat capability for isolating the AI proxy in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::ai::{AiResult, ChatModel, ChatSession};

mock! {
    pub ChatModel {}

    impl ChatModel for ChatModel {
        fn start_chat(&self) -> AiResult<Box<dyn ChatSession>>;
    }
}

mock! {
    pub ChatSession {}

    #[async_trait]
    impl ChatSession for ChatSession {
        async fn send_message(&mut self, message: &str) -> AiResult<String>;
    }
}
