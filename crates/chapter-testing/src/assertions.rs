//! Custom assertions over the CLI's `--format json` output.
//!
//! Every command prints `{"badge"?, "content": ..., "suggestions"?}`; these
//! helpers look inside `content`.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliResult;

/// Fail with the captured stderr when the command did not succeed.
pub fn assert_success(result: &CliResult) -> Result<()> {
    if !result.success() {
        anyhow::bail!(
            "Command failed with {}\nstdout:\n{}\nstderr:\n{}",
            result.status,
            result.stdout,
            result.stderr
        );
    }
    Ok(())
}

/// Collect the `id` field of every entry in the array at `pointer`.
pub fn ids_at(json: &Value, pointer: &str) -> Result<Vec<Value>> {
    let entries = json
        .pointer(pointer)
        .and_then(Value::as_array)
        .with_context(|| format!("Expected array at '{}'", pointer))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry
                .get("id")
                .cloned()
                .with_context(|| format!("Entry {} at '{}' has no id", i, pointer))
        })
        .collect()
}

/// Assert the numeric ids of one event bucket (`upcoming` or `past`).
pub fn assert_bucket_ids(json: &Value, bucket: &str, expected: &[i64]) -> Result<()> {
    let pointer = format!("/content/{}/entries", bucket);
    let ids = ids_at(json, &pointer)?;
    let expected: Vec<Value> = expected.iter().map(|id| Value::from(*id)).collect();

    if ids != expected {
        anyhow::bail!("Expected {} ids {:?}, got {:?}", bucket, expected, ids);
    }

    Ok(())
}

/// Assert the page number and page count reported for a bucket.
pub fn assert_bucket_page(
    json: &Value,
    bucket: &str,
    page: u64,
    total_pages: u64,
) -> Result<()> {
    let meta = json
        .pointer(&format!("/content/{}/page", bucket))
        .with_context(|| format!("Expected page metadata for '{}'", bucket))?;

    let actual_page = meta["page"].as_u64().context("page is not a number")?;
    let actual_total = meta["total_pages"]
        .as_u64()
        .context("total_pages is not a number")?;

    if (actual_page, actual_total) != (page, total_pages) {
        anyhow::bail!(
            "Expected {} page {}/{}, got {}/{}",
            bucket,
            page,
            total_pages,
            actual_page,
            actual_total
        );
    }

    Ok(())
}

/// Assert how many records were rejected for unreadable dates.
pub fn assert_rejected_count(json: &Value, expected: usize) -> Result<()> {
    let rejected = json["content"]["rejected"]
        .as_array()
        .context("Expected 'content.rejected' array in JSON")?;

    if rejected.len() != expected {
        anyhow::bail!(
            "Expected {} rejected records, got {}",
            expected,
            rejected.len()
        );
    }

    Ok(())
}
