use crate::models::{
    AttributionStatus, DailyImpression, SectionKind, StorySection, StorySectionView, UserProfile,
};
use crate::utils::dates::{display_or_raw, EventDate};

/// Build the chronological attribution story for one user.
///
/// Pure and deterministic: reads the profile, produces fresh sections,
/// never fails. Missing fields drop their section; malformed date strings
/// leave a section undated (undated sections sort after all dated ones).
pub fn generate_user_story(user: &UserProfile) -> Vec<StorySection> {
    let mut sections = Vec::new();

    // 1. First contact with the measurement pixel
    if let Some(first_seen) = present(&user.first_time_seen) {
        sections.push(StorySection::new(
            SectionKind::FirstSeen,
            format!(
                "User first detected by our measurement pixel on **{}**.",
                display_or_raw(first_seen)
            ),
            EventDate::parse(first_seen),
        ));
    }

    // 2. Ad exposure: the earliest day opens the story, later impressions
    //    split into segments wherever a milestone day falls between them
    push_exposure_sections(user, &mut sections);

    // 3. Identity linkage, skipped when it carries the same raw date as
    //    first contact
    if let Some(linked) = present(&user.advertiser_id_first_seen) {
        if user.first_time_seen.as_deref() != Some(linked) {
            sections.push(StorySection::new(
                SectionKind::IdentityLinked,
                "Received user identifier from the advertiser platform.\nFull match established between ad activity and platform activity."
                    .to_string(),
                EventDate::parse(linked),
            ));
        }
    }

    // 4. First deposit, closing with how the crediting rules judged it
    if let Some(ftd) = present(&user.first_time_attributed_ftd) {
        sections.push(StorySection::new(
            SectionKind::FirstDeposit,
            first_deposit_content(user),
            EventDate::parse(ftd),
        ));
    }

    // 5. Post-FTD value summary, undated
    if user.total_attributed_purchase > 0 {
        sections.push(StorySection::new(
            SectionKind::OngoingValue,
            format!(
                "Following the FTD, the user continues to engage:\n• {} attributed purchases\n• Total Value: **${:.2}**",
                user.total_attributed_purchase, user.total_attributed_purchase_value
            ),
            None,
        ));
    }

    // 6. Chronological order; the sort is stable, so undated sections keep
    //    their emission order at the end
    sections.sort_by_key(|section| (section.date.is_none(), section.date));

    sections
}

/// `generate_user_story` decorated for the renderer.
pub fn generate_user_story_views(user: &UserProfile) -> Vec<StorySectionView> {
    generate_user_story(user)
        .into_iter()
        .map(StorySectionView::from)
        .collect()
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

fn push_exposure_sections(user: &UserProfile, sections: &mut Vec<StorySection>) {
    if user.daily_imps.is_empty() {
        return;
    }

    // Ascending by parsed day; impressions with unparseable dates keep
    // their relative order after every dated one.
    let mut sorted: Vec<&DailyImpression> = user.daily_imps.iter().collect();
    sorted.sort_by_key(|imp| {
        let day = EventDate::parse(&imp.date);
        (day.is_none(), day)
    });

    let first_day = EventDate::parse(&sorted[0].date);
    let split_at = sorted
        .iter()
        .position(|imp| EventDate::parse(&imp.date) != first_day)
        .unwrap_or(sorted.len());
    let (first_day_imps, later_imps) = sorted.split_at(split_at);

    let bullet_list = first_day_imps
        .iter()
        .map(|imp| format!("• {} - {} impressions", imp.domain, imp.count))
        .collect::<Vec<_>>()
        .join("\n");

    sections.push(StorySection::new(
        SectionKind::ExposureBegins,
        format!(
            "The user starts seeing campaign ads while browsing:\n{}\n\nThis is not a single active interaction, but repeated passive exposure throughout the day.",
            bullet_list
        ),
        first_day,
    ));

    if later_imps.is_empty() {
        return;
    }

    // Milestone days close the open segment when an impression lands
    // strictly after them. Equal days never split; neither do impressions
    // whose date did not parse.
    let milestones = milestone_days(user);
    let mut segments: Vec<Vec<&DailyImpression>> = Vec::new();
    let mut current: Vec<&DailyImpression> = Vec::new();
    let mut next_milestone = 0;

    for imp in later_imps {
        if let Some(day) = EventDate::parse(&imp.date) {
            while next_milestone < milestones.len() && day > milestones[next_milestone] {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                next_milestone += 1;
            }
        }
        current.push(imp);
    }
    if !current.is_empty() {
        segments.push(current);
    }

    for (position, segment) in segments.iter().enumerate() {
        let kind = if position == 0 {
            SectionKind::ContinuedExposure
        } else {
            SectionKind::AdditionalExposure
        };
        let bullets = segment
            .iter()
            .map(|imp| {
                format!(
                    "• {} - {} impressions | {}",
                    imp.domain,
                    imp.count,
                    display_or_raw(&imp.date)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        // Earliest parsed day in the segment; an all-unparseable segment
        // stays undated.
        let segment_day = segment.iter().find_map(|imp| EventDate::parse(&imp.date));

        sections.push(StorySection::new(
            kind,
            format!("Continued ad exposure across sites:\n{}", bullets),
            segment_day,
        ));
    }
}

/// Days of the non-impression events that break exposure into segments:
/// identity linkage (when it tells a separate story from first contact)
/// and the attributed first deposit.
fn milestone_days(user: &UserProfile) -> Vec<EventDate> {
    let mut days = Vec::new();
    if let Some(linked) = present(&user.advertiser_id_first_seen) {
        if user.first_time_seen.as_deref() != Some(linked) {
            if let Some(day) = EventDate::parse(linked) {
                days.push(day);
            }
        }
    }
    if let Some(ftd) = present(&user.first_time_attributed_ftd) {
        if let Some(day) = EventDate::parse(ftd) {
            days.push(day);
        }
    }
    days.sort();
    days
}

fn first_deposit_content(user: &UserProfile) -> String {
    let attribution = &user.attribution;
    let rule_parts = match (
        attribution.signal.label(),
        attribution.window.map(|w| w.label()),
    ) {
        (Some(signal), Some(window)) => format!(" (**{}** signal, **{}** window)", signal, window),
        (Some(signal), None) => format!(" (**{}** signal)", signal),
        (None, Some(window)) => format!(" (**{}** window)", window),
        (None, None) => String::new(),
    };

    let closing = match attribution.status {
        AttributionStatus::Attributed => format!(
            "The deposit meets attribution rules{} and is credited to the campaign.",
            rule_parts
        ),
        AttributionStatus::Partial => format!(
            "The deposit partially meets attribution rules{} and receives partial credit.",
            rule_parts
        ),
        AttributionStatus::NotAttributed => {
            "The deposit falls outside attribution rules and is not credited to the campaign."
                .to_string()
        }
    };

    format!(
        "The user makes their first deposit.\n• First FTD ever\n• First FTD attributed to us\n\n{}",
        closing
    )
}
