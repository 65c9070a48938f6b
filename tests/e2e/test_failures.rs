use crate::e2e::helpers;

use helpers::assertions::assert_no_files;
use helpers::aws_mocks::create_unreachable_polly_repository;
use helpers::{try_config, TestContext};
use pdf_tts::domain::synthesis::{InvalidChoiceError, SynthesisFailureKind, TtsError};
use pdf_tts::error::AppError;
use pdf_tts::infrastructure::config::ConfigError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[tokio::test]
async fn it_should_reject_unknown_voice() {
    let ctx = TestContext::new();
    let config = ctx.config(&[("TEXT_INPUT", "Hello world."), ("VOICE_ID", "Alexa")]);

    let err = ctx.run(&config).await.unwrap_err();

    match err {
        AppError::Tts(TtsError::InvalidChoice(InvalidChoiceError::NotAllowed {
            field,
            value,
            valid,
        })) => {
            assert_eq!(field, "voice");
            assert_eq!(value, "Alexa");
            assert!(valid.contains(&"Joanna".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(ctx.tts.call_count(), 0);
    assert_eq!(err_exit_code(&ctx, &config).await, 3);
}

#[tokio::test]
async fn it_should_reject_unknown_accent_format_and_rate() {
    let ctx = TestContext::new();

    for pair in [
        ("ENG_ACCENT", "en-CA"),
        ("OUTPUT_FORMAT", "wav"),
        ("SAMPLE_RATE", "44100"),
    ] {
        let config = ctx.config(&[("TEXT_INPUT", "Hello world."), pair]);
        let err = ctx.run(&config).await.unwrap_err();
        assert!(
            matches!(
                err,
                AppError::Tts(TtsError::InvalidChoice(InvalidChoiceError::NotAllowed { .. }))
            ),
            "{:?} should be rejected",
            pair
        );
    }
    assert_eq!(ctx.tts.call_count(), 0);
}

#[tokio::test]
async fn it_should_reject_pcm_at_high_sample_rate() {
    let ctx = TestContext::new();
    let config = ctx.config(&[
        ("TEXT_INPUT", "Hello world."),
        ("OUTPUT_FORMAT", "pcm"),
        ("SAMPLE_RATE", "24000"),
    ]);

    let err = ctx.run(&config).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Tts(TtsError::InvalidChoice(
            InvalidChoiceError::FormatRateMismatch { .. }
        ))
    ));
    assert_eq!(ctx.tts.call_count(), 0);
    assert_no_files(ctx.output_dir());
}

#[tokio::test]
async fn it_should_reject_malformed_credentials_before_any_call() {
    let ctx = TestContext::new();
    let config = ctx.config(&[
        ("TEXT_INPUT", "Hello world."),
        ("AWS_ACCESS_KEY", "not a key"),
    ]);

    let err = ctx.run(&config).await.unwrap_err();

    assert!(matches!(err, AppError::Tts(TtsError::Configuration(_))));
    assert_eq!(ctx.tts.call_count(), 0);
    assert_eq!(ctx.pdf.call_count(), 0);
}

#[tokio::test]
async fn it_should_require_credentials_in_config() {
    let dir = tempfile::tempdir().unwrap();
    let err = try_config(dir.path(), &[("AWS_ACCESS_KEY", "")]).unwrap_err();

    assert!(matches!(err, ConfigError::Missing("AWS_ACCESS_KEY")));
    assert_eq!(AppError::from(err).exit_code(), 2);
}

#[tokio::test]
async fn it_should_report_unreachable_provider_as_network_failure() {
    let ctx = TestContext::new();
    let config = ctx.config(&[("TEXT_INPUT", "Hello world.")]);
    let polly = Arc::new(create_unreachable_polly_repository());
    let mut rng = StdRng::seed_from_u64(1);

    let err = pdf_tts::app::run(&config, &ctx.pdf, polly, &mut rng)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Tts(TtsError::Synthesis {
            kind: SynthesisFailureKind::Network,
            ..
        })
    ));
    assert_eq!(err.exit_code(), 5);
    assert_no_files(ctx.output_dir());
}

async fn err_exit_code(ctx: &TestContext, config: &pdf_tts::infrastructure::config::Config) -> i32 {
    ctx.run(config).await.unwrap_err().exit_code()
}
