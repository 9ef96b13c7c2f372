//! Milestone assignment and due-date proximity.

use chrono::Duration;

use super::{Check, CheckContext};
use crate::config::MilestoneConfig;
use crate::error::Result;
use crate::report::{Finding, Severity};

/// Text reported when no milestone is assigned.
pub const NO_MILESTONE_MESSAGE: &str = "PR is not assigned to a milestone.";

/// Checks that an open pull request's milestone is not about to close.
#[derive(Debug, Clone)]
pub struct MilestoneCheck {
    days_before_due: u32,
    if_no_milestone: Severity,
}

impl MilestoneCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &MilestoneConfig) -> Self {
        Self {
            days_before_due: config.days_before_due,
            if_no_milestone: config.if_no_milestone,
        }
    }
}

impl Check for MilestoneCheck {
    fn name(&self) -> &'static str {
        "milestone"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let Some(milestone) = ctx.pr.milestone() else {
            return Ok(vec![Finding::new(NO_MILESTONE_MESSAGE, self.if_no_milestone)]);
        };

        if ctx.pr.state() == "closed" {
            return Ok(Vec::new());
        }

        let Some(due_on) = milestone.due_on else {
            return Ok(Vec::new());
        };

        let time_before_due = due_on - ctx.now;
        if time_before_due > Duration::days(i64::from(self.days_before_due)) {
            return Ok(Vec::new());
        }

        tracing::debug!(
            "milestone '{}' is due in {} hour(s)",
            milestone.title,
            time_before_due.num_hours()
        );

        let mut message = format!(
            "This PR is assigned to the milestone [{}]({}). ",
            milestone.title,
            milestone.url.as_deref().unwrap_or_default()
        );
        if time_before_due > Duration::zero() {
            message.push_str(&format!(
                "This milestone is due in less than {} days.\n",
                self.days_before_due
            ));
        } else {
            message.push_str("The due date for this milestone has already passed.\n");
        }
        message.push_str(
            "Please make sure to get it merged by then or assign it to a milestone with a later deadline.",
        );

        Ok(vec![Finding::warning(message)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_utils::{changeset, now, run_check};
    use crate::host::{Milestone, PrSnapshot};

    fn pr_with_milestone(due_in: Option<Duration>, state: &str) -> PrSnapshot {
        PrSnapshot {
            state: state.to_string(),
            milestone: Some(Milestone {
                title: "24.3".to_string(),
                due_on: due_in.map(|d| now() + d),
                url: Some("https://example.com/milestone/12".to_string()),
            }),
            ..Default::default()
        }
    }

    fn run(config: MilestoneConfig, pr: &PrSnapshot) -> Vec<Finding> {
        run_check(
            &MilestoneCheck::from_config(&config),
            &changeset(Vec::new()),
            pr,
        )
    }

    #[test]
    fn test_no_milestone_uses_configured_severity() {
        let pr = PrSnapshot::default();

        assert_eq!(
            run(MilestoneConfig::default(), &pr),
            vec![Finding::warning(NO_MILESTONE_MESSAGE)]
        );

        let config = MilestoneConfig {
            if_no_milestone: Severity::Error,
            ..Default::default()
        };
        assert_eq!(run(config, &pr), vec![Finding::error(NO_MILESTONE_MESSAGE)]);
    }

    #[test]
    fn test_no_milestone_can_be_silenced() {
        let config = MilestoneConfig {
            if_no_milestone: Severity::None,
            ..Default::default()
        };
        let findings = run(config, &PrSnapshot::default());

        // Severity::None findings are dropped by the sink
        assert_eq!(findings[0].severity, Severity::None);
    }

    #[test]
    fn test_due_soon_warns() {
        let pr = pr_with_milestone(Some(Duration::days(2)), "open");
        let findings = run(MilestoneConfig::default(), &pr);

        assert_eq!(
            findings,
            vec![Finding::warning(
                "This PR is assigned to the milestone [24.3](https://example.com/milestone/12). \
                 This milestone is due in less than 5 days.\n\
                 Please make sure to get it merged by then or assign it to a milestone with a later deadline."
            )]
        );
    }

    #[test]
    fn test_past_due_warns() {
        let pr = pr_with_milestone(Some(Duration::days(-1)), "open");
        let findings = run(MilestoneConfig::default(), &pr);

        assert_eq!(findings.len(), 1);
        assert!(
            findings[0]
                .message
                .contains("The due date for this milestone has already passed.\n")
        );
    }

    #[test]
    fn test_far_due_date_is_fine() {
        let pr = pr_with_milestone(Some(Duration::days(6)), "open");
        assert!(run(MilestoneConfig::default(), &pr).is_empty());

        let config = MilestoneConfig {
            days_before_due: 10,
            ..Default::default()
        };
        assert_eq!(run(config, &pr).len(), 1);
    }

    #[test]
    fn test_closed_or_undated_milestones_are_skipped() {
        let closed = pr_with_milestone(Some(Duration::days(1)), "closed");
        assert!(run(MilestoneConfig::default(), &closed).is_empty());

        let undated = pr_with_milestone(None, "open");
        assert!(run(MilestoneConfig::default(), &undated).is_empty());
    }
}
