use std::path::PathBuf;

use log::LevelFilter;
use word_tally::app;
use word_tally::config::Config;
use word_tally::error::AppError;
use word_tally::options::OutputFormat;
use word_tally_domain::TallyCounts;
use word_tally_engine::config::Config as EngineConfig;
use word_tally_engine::options::PoolKind;
use word_tally_shared_kernel::{InfrastructureError, WordTallyError};

use crate::common::{PlayFile, SCENE};

fn config(input: PathBuf, pool: PoolKind) -> Config {
    Config {
        input,
        engine: EngineConfig { jobs: 4, pool },
        format: OutputFormat::Text,
        log_level: LevelFilter::Off,
    }
}

#[test]
fn scene_counts_match_expected_totals() {
    let play = PlayFile::new("scene.txt", SCENE);
    let mut out = Vec::<u8>::new();
    let report = app::run(&config(play.path.clone(), PoolKind::Parallel), &mut out).unwrap();

    assert_eq!(report.counts, TallyCounts { horatio: 1, and: 2, hamlet: 2, god: 1, total: 8 });
    assert_eq!(report.lines, 2);
    assert!(String::from_utf8(out).unwrap().contains("Total word count = 8"));
}

#[test]
fn missing_input_dispatches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::<u8>::new();
    let err = app::run(&config(dir.path().join("Hamlet.txt"), PoolKind::Parallel), &mut out)
        .unwrap_err();

    let AppError::Tally(WordTallyError::Context { context, source }) = &err else {
        panic!("expected context wrapper, got {err:?}");
    };
    assert_eq!(context, "failed to open input");
    assert!(matches!(
        **source,
        WordTallyError::Infrastructure(InfrastructureError::SourceOpen { .. })
    ));
    assert!(err.to_string().contains("could not open"));
    assert!(out.is_empty());
}

#[test]
fn zero_jobs_fails_while_tallying_with_context() {
    let play = PlayFile::new("scene.txt", SCENE);
    let mut cfg = config(play.path.clone(), PoolKind::Parallel);
    cfg.engine.jobs = 0;

    let err = app::run(&cfg, &mut Vec::<u8>::new()).unwrap_err();
    let display = err.to_string();
    assert!(display.starts_with("failed to tally "), "{display}");
    assert!(display.contains("at least one worker"), "{display}");
}

#[test]
fn pool_kind_does_not_change_results() {
    let text: String = (0..500)
        .map(|i| match i % 4 {
            0 => "Hamlet's father, and God's truth.\n",
            1 => "\n",
            2 => "HORATIO -- 'tis here!\n",
            _ => "Hamlet--Horatio and so on\n",
        })
        .collect();
    let play = PlayFile::new("long.txt", &text);

    let parallel = app::run(&config(play.path.clone(), PoolKind::Parallel), &mut Vec::<u8>::new()).unwrap();
    let inline = app::run(&config(play.path.clone(), PoolKind::Inline), &mut Vec::<u8>::new()).unwrap();

    assert_eq!(parallel.counts, inline.counts);
    assert_eq!(parallel.counts.hamlet, 125);
    assert_eq!(parallel.counts.god, 125);
    assert_eq!(parallel.counts.horatio, 125);
    assert_eq!(parallel.counts.and, 250);
    assert!(parallel.counts.total >= parallel.counts.category_sum());
}
