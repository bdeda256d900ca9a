use chapter_runtime::SiteContext;

use crate::presentation::view_models::{
    CommandResultViewModel, MetricsViewModel, SiteViewModel, SocialLinkViewModel,
};

pub fn present_site(context: &SiteContext) -> CommandResultViewModel<SiteViewModel> {
    let metrics = &context.settings.community_metrics;

    CommandResultViewModel::new(SiteViewModel {
        name: context.site.name().map(str::to_string),
        theme: context.theme().to_string(),
        metrics: MetricsViewModel {
            events_completed: metrics.events_completed,
            total_members: metrics.total_members,
            bootcamps_held: metrics.bootcamps_held,
            awards_won: metrics.awards_won,
        },
        social: context
            .social
            .links()
            .map(|(platform, url)| SocialLinkViewModel {
                platform: platform.to_string(),
                url: url.to_string(),
            })
            .collect(),
        site: context.site.0.clone(),
    })
}
