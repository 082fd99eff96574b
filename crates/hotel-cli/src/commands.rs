use anyhow::Result;
use comfy_table::Table;
use hotel_core::HandlerOutcome;
use hotel_validate::RejectionRule;

use hotel_cli::pipeline::{
    RunOptions, SettingsOverrides, resolve_settings, run_event_file, run_prefix,
};

use crate::cli::{BatchArgs, EventArgs, StoreArgs};
use crate::summary::apply_table_style;

pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Description"]);
    apply_table_style(&mut table);
    for rule in RejectionRule::all() {
        table.add_row(vec![rule.label(), rule.description()]);
    }
    println!("{table}");
}

pub fn run_event(args: &EventArgs) -> Result<HandlerOutcome> {
    let options = run_options(&args.store)?;
    run_event_file(&args.event_json, &options)
}

pub fn run_batch(args: &BatchArgs) -> Result<HandlerOutcome> {
    let options = run_options(&args.store)?;
    run_prefix(&args.bucket, &args.prefix, &options)
}

fn run_options(args: &StoreArgs) -> Result<RunOptions> {
    let overrides = SettingsOverrides {
        raw_prefix: args.raw_prefix.clone(),
        processed_prefix: args.processed_prefix.clone(),
        rejected_prefix: args.rejected_prefix.clone(),
        city: args.city.clone(),
    };
    let settings = resolve_settings(args.config.as_deref(), &overrides)?;
    Ok(RunOptions {
        store_root: args.store_root.clone(),
        settings,
        dry_run: args.dry_run,
    })
}
