//! Task counts per support tag

use crate::config::Config;
use crate::core::ports::TaskSource;
use crate::error::Result;
use crate::output::{TagCount, TagCountReport};

use super::TAG_FIELDS;

/// Count the tasks carrying each configured support tag
pub fn support_tags(source: &dyn TaskSource, config: &Config) -> Result<TagCountReport> {
    let mut tags = Vec::with_capacity(config.settings.tags.support.len());
    for tag in &config.settings.tags.support {
        let mut count = 0;
        for task in source.tasks_for_tag(&tag.id, TAG_FIELDS) {
            task?;
            count += 1;
        }
        log::debug!("tag {} ({}) has {count} tasks", tag.name, tag.id);
        tags.push(TagCount {
            name: tag.name.clone(),
            id: tag.id.clone(),
            tasks: count,
        });
    }
    Ok(TagCountReport { tags })
}
