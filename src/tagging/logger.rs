use chrono::NaiveTime;
use serde::Serialize;

use crate::{
    errors::{PlayLogError, PlayLogResult},
    export::{write_csv, CsvExport, CSV_MIME_TYPE},
    log_info,
    models::{CallType, Caller, Entry, FormState, Outcome, SecondChance},
    settings::{LoggerSettings, TimestampSampling},
};

use super::{
    resolve_points, resolve_timestamp,
    stats::{summarize, PlayStats},
    table::{render_table, TableView},
};

const ENABLE_LOGS: bool = true;

/// What the UI needs to draw the form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    /// Initial widget values: the first options, or the last submission's choices.
    pub defaults: FormState,
    /// Stamp that "use current time" resolves to under render-time sampling.
    pub timestamp_preview: String,
    pub call_types: Vec<CallType>,
    pub callers: Vec<Caller>,
    pub outcomes: Vec<Outcome>,
    pub second_chances: Vec<SecondChance>,
}

/// Append-only play log for one session.
#[derive(Debug, Default)]
pub struct PlayLogger {
    entries: Vec<Entry>,
    rendered_at: Option<NaiveTime>,
    last_form: Option<FormState>,
}

impl PlayLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw the form and take the render-time clock sample. Widgets keep the
    /// values of the last accepted submission.
    pub fn render_form(&mut self, now: NaiveTime) -> FormView {
        self.rendered_at = Some(now);
        FormView {
            defaults: self.last_form.clone().unwrap_or_default(),
            timestamp_preview: resolve_timestamp(true, "", now),
            call_types: CallType::ALL.to_vec(),
            callers: Caller::ALL.to_vec(),
            outcomes: Outcome::ALL.to_vec(),
            second_chances: SecondChance::ALL.to_vec(),
        }
    }

    pub fn add_entry(
        &mut self,
        form: FormState,
        now: NaiveTime,
        settings: &LoggerSettings,
    ) -> PlayLogResult<Entry> {
        if settings.require_play_name && form.play_name.trim().is_empty() {
            return Err(PlayLogError::Validation("play name is required".into()));
        }

        let clock = match settings.timestamp_sampling {
            TimestampSampling::Render => self.rendered_at.unwrap_or(now),
            TimestampSampling::Submit => now,
        };

        self.last_form = Some(form.clone());

        let entry = Entry {
            sequence: self.entries.len() as u64 + 1,
            timestamp: resolve_timestamp(form.use_current_time, &form.timestamp, clock),
            play_name: form.play_name,
            call_type: form.call_type,
            caller: form.caller,
            points: resolve_points(form.outcome),
            outcome: form.outcome,
            second_chance: form.second_chance,
        };

        log_info!(
            "Logged play #{} '{}' ({}, {} pts)",
            entry.sequence,
            entry.play_name,
            entry.outcome.as_str(),
            entry.points
        );

        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn render_table(&self) -> TableView {
        render_table(self.entries())
    }

    pub fn export_csv(&self) -> Vec<u8> {
        write_csv(self.entries())
    }

    /// CSV download payload; refused while the log is empty.
    pub fn download(&self, file_name: &str) -> PlayLogResult<CsvExport> {
        if self.is_empty() {
            return Err(PlayLogError::Export("no plays logged yet".into()));
        }
        Ok(CsvExport {
            file_name: file_name.to_string(),
            mime_type: CSV_MIME_TYPE.to_string(),
            bytes: self.export_csv(),
        })
    }

    pub fn summarize(&self) -> PlayStats {
        summarize(self.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::csv::tests::parse_csv;
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn form(outcome: Outcome) -> FormState {
        FormState {
            use_current_time: true,
            play_name: "Chin".into(),
            outcome,
            ..FormState::default()
        }
    }

    #[test]
    fn manual_timestamp_scenario() {
        let mut logger = PlayLogger::new();
        let submitted = FormState {
            use_current_time: false,
            timestamp: "12:35 Q1".into(),
            play_name: "Chin".into(),
            call_type: CallType::Halfcourt,
            caller: Caller::Coach,
            outcome: Outcome::Made3,
            second_chance: SecondChance::No,
        };
        let entry = logger
            .add_entry(submitted, at(20, 0, 0), &LoggerSettings::default())
            .unwrap();

        assert_eq!(
            entry.to_row(),
            vec!["12:35 Q1", "Chin", "Halfcourt", "Coach", "Made 3", "3", "No"]
        );
        assert_eq!(entry.points, 3);
        assert_eq!(logger.len(), 1);
    }

    #[test]
    fn appends_preserve_order_and_earlier_entries() {
        let mut logger = PlayLogger::new();
        let settings = LoggerSettings::default();

        let first = logger
            .add_entry(form(Outcome::FoulMissedBoth), at(10, 0, 0), &settings)
            .unwrap();
        let snapshot = logger.entries().to_vec();
        logger
            .add_entry(form(Outcome::FoulMade2of2), at(10, 0, 5), &settings)
            .unwrap();

        let points: Vec<u32> = logger.entries().iter().map(|e| e.points).collect();
        assert_eq!(points, vec![0, 2]);
        assert_eq!(logger.entries()[0], first);
        assert_eq!(&logger.entries()[..1], snapshot.as_slice());

        let sequences: Vec<u64> = logger.entries().iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);

        let text = String::from_utf8(logger.export_csv()).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn empty_fields_are_accepted_by_default() {
        let mut logger = PlayLogger::new();
        let blank = FormState {
            use_current_time: false,
            ..FormState::default()
        };
        let entry = logger
            .add_entry(blank, at(1, 2, 3), &LoggerSettings::default())
            .unwrap();
        assert_eq!(entry.timestamp, "");
        assert_eq!(entry.play_name, "");
        assert_eq!(entry.points, 2);
    }

    #[test]
    fn required_play_name_rejects_blank_names() {
        let mut logger = PlayLogger::new();
        let settings = LoggerSettings {
            require_play_name: true,
            ..LoggerSettings::default()
        };
        let blank = FormState {
            play_name: "   ".into(),
            ..FormState::default()
        };
        let err = logger.add_entry(blank, at(1, 0, 0), &settings).unwrap_err();
        assert!(matches!(err, PlayLogError::Validation(_)));
        assert!(logger.is_empty());
    }

    #[test]
    fn form_keeps_last_submitted_choices() {
        let mut logger = PlayLogger::new();
        assert_eq!(logger.render_form(at(9, 0, 0)).defaults, FormState::default());

        let submitted = FormState {
            use_current_time: false,
            timestamp: "Q2 8:00".into(),
            play_name: "Horns".into(),
            call_type: CallType::Slob,
            caller: Caller::Player,
            outcome: Outcome::Missed3,
            second_chance: SecondChance::Yes,
        };
        logger
            .add_entry(submitted.clone(), at(9, 0, 10), &LoggerSettings::default())
            .unwrap();

        let view = logger.render_form(at(9, 1, 0));
        assert_eq!(view.defaults, submitted);
        assert_eq!(view.timestamp_preview, "09:01:00");
    }

    #[test]
    fn rejected_submission_does_not_change_form() {
        let mut logger = PlayLogger::new();
        let settings = LoggerSettings {
            require_play_name: true,
            ..LoggerSettings::default()
        };
        let blank = FormState {
            outcome: Outcome::Turnover,
            ..FormState::default()
        };
        assert!(logger.add_entry(blank, at(9, 0, 0), &settings).is_err());
        assert_eq!(logger.render_form(at(9, 0, 5)).defaults, FormState::default());
    }

    #[test]
    fn render_sampling_uses_form_draw_time() {
        let mut logger = PlayLogger::new();
        let view = logger.render_form(at(9, 15, 0));
        assert_eq!(view.timestamp_preview, "09:15:00");

        let entry = logger
            .add_entry(form(Outcome::Made2), at(9, 17, 30), &LoggerSettings::default())
            .unwrap();
        assert_eq!(entry.timestamp, "09:15:00");
    }

    #[test]
    fn render_sampling_without_render_uses_now() {
        let mut logger = PlayLogger::new();
        let entry = logger
            .add_entry(form(Outcome::Made2), at(9, 17, 30), &LoggerSettings::default())
            .unwrap();
        assert_eq!(entry.timestamp, "09:17:30");
    }

    #[test]
    fn submit_sampling_uses_click_time() {
        let mut logger = PlayLogger::new();
        let settings = LoggerSettings {
            timestamp_sampling: TimestampSampling::Submit,
            ..LoggerSettings::default()
        };
        logger.render_form(at(9, 15, 0));
        let entry = logger
            .add_entry(form(Outcome::Made2), at(9, 17, 30), &settings)
            .unwrap();
        assert_eq!(entry.timestamp, "09:17:30");
    }

    #[test]
    fn table_tracks_log() {
        let mut logger = PlayLogger::new();
        let empty = logger.render_table();
        assert!(empty.is_empty);
        assert!(empty.rows.is_empty());
        assert_eq!(empty.columns.len(), 7);

        logger
            .add_entry(form(Outcome::Made3), at(11, 0, 0), &LoggerSettings::default())
            .unwrap();
        let table = logger.render_table();
        assert!(!table.is_empty);
        assert_eq!(
            table.rows,
            vec![vec!["11:00:00", "Chin", "Early Offense", "Coach", "Made 3", "3", "No"]]
        );
    }

    #[test]
    fn download_requires_entries() {
        let mut logger = PlayLogger::new();
        assert!(matches!(
            logger.download("play_tags.csv"),
            Err(PlayLogError::Export(_))
        ));

        logger
            .add_entry(form(Outcome::Turnover), at(11, 0, 0), &LoggerSettings::default())
            .unwrap();
        let export = logger.download("play_tags.csv").unwrap();
        assert_eq!(export.file_name, "play_tags.csv");
        assert_eq!(export.mime_type, "text/csv");
        let records = parse_csv(std::str::from_utf8(&export.bytes).unwrap());
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], logger.entries()[0].to_row());
    }
}
