use contracts::domain::a009_ai_model::aggregate::{AiModel, AiModelStatus};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<AiModel>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<AiModel> {
    &STORE
}

#[allow(clippy::too_many_arguments)]
fn model(
    n: u32,
    name: &str,
    provider: &str,
    model: &str,
    temperature: f64,
    max_tokens: u32,
    status: AiModelStatus,
    system_prompt: &str,
) -> AiModel {
    AiModel {
        id: format!("AIM-{:03}", n),
        name: name.to_string(),
        provider: provider.to_string(),
        model: model.to_string(),
        temperature,
        max_tokens,
        system_prompt: system_prompt.to_string(),
        status,
        created_at: utc_date(2024, 2, n),
    }
}

fn fixtures() -> Vec<AiModel> {
    use AiModelStatus::*;
    vec![
        model(
            1,
            "Product description writer",
            "OpenAI",
            "gpt-4o-mini",
            0.7,
            1024,
            Active,
            "You write concise, friendly product descriptions for an online store. Never invent specifications.",
        ),
        model(
            2,
            "Support reply assistant",
            "Anthropic",
            "claude-3-5-haiku",
            0.3,
            2048,
            Active,
            "Draft polite replies to customer complaints. Offer a refund only when the order is eligible.",
        ),
        model(
            3,
            "Review summarizer",
            "Mistral",
            "mistral-small",
            0.2,
            512,
            Testing,
            "Summarize customer reviews into pros and cons.",
        ),
        model(
            4,
            "SEO keyword generator",
            "OpenAI",
            "gpt-3.5-turbo",
            1.1,
            256,
            Inactive,
            "",
        ),
    ]
}
