use anyhow::Result;
use chapter_engine::partition_by_date;
use chapter_runtime::{LoadError, fetch_json, scan_content_dir};
use chapter_types::{
    Activity, Event, FaqEntry, InvalidDate, Resource, Settings, SiteInfo, SocialLinks, TeamMember,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{
    CheckStatus, CheckViewModel, RejectedRecordViewModel, ResourceCheckViewModel,
};
use crate::presentation::Renderer;

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let reference = ctx.reference_date();
    let mut resources = Vec::with_capacity(Resource::ALL.len());
    let mut rejected = Vec::new();

    for resource in Resource::ALL {
        let (check, invalid) = match resource {
            Resource::Events => {
                let outcome = fetch_checked::<Vec<Event>>(ctx, resource).await;
                dated_check(resource, outcome, reference)
            }
            Resource::Activities => {
                let outcome = fetch_checked::<Vec<Activity>>(ctx, resource).await;
                dated_check(resource, outcome, reference)
            }
            Resource::Team => {
                let outcome = fetch_checked::<Vec<TeamMember>>(ctx, resource).await;
                (resource_check(resource, outcome.map(|t| Some(t.len()))), Vec::new())
            }
            Resource::Faq => {
                let outcome = fetch_checked::<Vec<FaqEntry>>(ctx, resource).await;
                (resource_check(resource, outcome.map(|f| Some(f.len()))), Vec::new())
            }
            Resource::Site => {
                let outcome = fetch_checked::<SiteInfo>(ctx, resource).await;
                (resource_check(resource, outcome.map(|_| None)), Vec::new())
            }
            Resource::Settings => {
                let outcome = fetch_checked::<Settings>(ctx, resource).await;
                (resource_check(resource, outcome.map(|_| None)), Vec::new())
            }
            Resource::Social => {
                let outcome = fetch_checked::<SocialLinks>(ctx, resource).await;
                (resource_check(resource, outcome.map(|s| Some(s.links().count()))), Vec::new())
            }
        };

        resources.push(check);
        rejected.extend(invalid);
    }

    let unknown_files = match ctx.source().directory() {
        Some(dir) => scan_content_dir(dir)?
            .unknown
            .iter()
            .map(|path| path.strip_prefix(dir).unwrap_or(path).display().to_string())
            .collect(),
        None => Vec::new(),
    };

    let content = CheckViewModel {
        source: ctx.source().to_string(),
        resources,
        rejected,
        unknown_files,
    };
    let failed = content.failed_count();

    let result = presenters::present_check(content);
    ctx.renderer().render(result)?;

    if failed > 0 {
        anyhow::bail!("Content check failed");
    }

    Ok(())
}

async fn fetch_checked<T>(ctx: &ExecutionContext, resource: Resource) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    let outcome = fetch_json::<T>(ctx.transport(), resource).await;
    match &outcome {
        Ok(_) => debug!(resource = %resource, "resource ok"),
        Err(err) => warn!(resource = %resource, error = %err, "resource failed check"),
    }
    outcome
}

fn resource_check(
    resource: Resource,
    outcome: Result<Option<usize>, LoadError>,
) -> ResourceCheckViewModel {
    let (status, records, message) = match outcome {
        Ok(records) => (CheckStatus::Ok, records, None),
        Err(err) if err.is_not_found() => (CheckStatus::Missing, None, Some(err.to_string())),
        Err(err) => (CheckStatus::Invalid, None, Some(err.to_string())),
    };

    ResourceCheckViewModel {
        resource: resource.name().to_string(),
        status,
        records,
        message,
    }
}

fn dated_check<T>(
    resource: Resource,
    outcome: Result<Vec<T>, LoadError>,
    reference: NaiveDate,
) -> (ResourceCheckViewModel, Vec<RejectedRecordViewModel>)
where
    T: chapter_types::Dated,
{
    match outcome {
        Ok(records) => {
            let count = records.len();
            let partition = partition_by_date(records.iter(), reference);
            let rejected = rejected_for(resource, &partition.rejected);
            (resource_check(resource, Ok(Some(count))), rejected)
        }
        Err(err) => (resource_check(resource, Err(err)), Vec::new()),
    }
}

fn rejected_for(resource: Resource, rejected: &[InvalidDate]) -> Vec<RejectedRecordViewModel> {
    rejected
        .iter()
        .map(|r| RejectedRecordViewModel {
            resource: Some(resource.name().to_string()),
            id: r.id.clone(),
            value: r.value.clone(),
        })
        .collect()
}
