use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use console_core::{ConsoleEvent, Field, OptionsForm};
use whisperui_interface::{DiarisationMethod, ModelSize, TranscriptionMethod};

use crate::controller::{Command, Snapshot, UiEvent};
use crate::theme::ColourMode;

const TOAST_TICKS: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    TranscribeFiles,
    SetupDocs,
    ApiDocs,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::TranscribeFiles, Self::SetupDocs, Self::ApiDocs];

    pub fn title(&self) -> &'static str {
        match self {
            Self::TranscribeFiles => "Transcribe Files",
            Self::SetupDocs => "Setup Docs",
            Self::ApiDocs => "API Docs",
        }
    }
}

/// One selectable row of the transcribe page: an attached file, a form
/// field, or the submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    File(usize),
    Field(Field),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    EditingPath,
    EditingCriteria,
}

/// View state of the dashboard. All domain state lives in the controller
/// task; the app holds the latest snapshot plus purely visual concerns.
pub struct App {
    cmd_tx: mpsc::UnboundedSender<Command>,
    download_dir: PathBuf,
    pub colour: ColourMode,
    pub page: Page,
    pub snapshot: Snapshot,
    pub cursor: usize,
    pub response_scroll: u16,
    pub docs_scroll: u16,
    pub toast: Option<String>,
    pub toast_is_error: bool,
    toast_ticks: u8,
    mode: InputMode,
    pub input_buffer: String,
    pub should_quit: bool,
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    all[next]
}

/// Fields currently shown, mirroring the conditional sections of the form:
/// the diarisation details only while diarisation is on, the criteria box
/// only while auditing is on.
pub fn visible_fields(form: &OptionsForm) -> Vec<Field> {
    let mut fields = vec![
        Field::TranscriptionMethod,
        Field::ModelSize,
        Field::Diarisation,
    ];
    if form.diarisation {
        fields.push(Field::DiarisationMethod);
        fields.push(Field::NumSpeakers);
    }
    fields.push(Field::Audit);
    if form.audit {
        fields.push(Field::Criteria);
    }
    fields
}

impl App {
    pub fn new(cmd_tx: mpsc::UnboundedSender<Command>, download_dir: PathBuf) -> Self {
        Self {
            cmd_tx,
            download_dir,
            colour: ColourMode::default(),
            page: Page::TranscribeFiles,
            snapshot: Snapshot::default(),
            cursor: 0,
            response_scroll: 0,
            docs_scroll: 0,
            toast: None,
            toast_is_error: false,
            toast_ticks: 0,
            mode: InputMode::Normal,
            input_buffer: String::new(),
            should_quit: false,
        }
    }

    pub fn rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = (0..self.snapshot.files.len()).map(Row::File).collect();
        rows.extend(visible_fields(&self.snapshot.form).into_iter().map(Row::Field));
        rows.push(Row::Submit);
        rows
    }

    pub fn selected_row(&self) -> Row {
        let rows = self.rows();
        rows[self.cursor.min(rows.len() - 1)]
    }

    pub fn is_editing_path(&self) -> bool {
        self.mode == InputMode::EditingPath
    }

    pub fn is_editing_criteria(&self) -> bool {
        self.mode == InputMode::EditingCriteria
    }

    fn send(&self, command: Command) {
        let _ = self.cmd_tx.send(command);
    }

    fn sync_form(&self) {
        self.send(Command::UpdateForm(self.snapshot.form.clone()));
    }

    fn show_toast(&mut self, message: impl Into<String>, is_error: bool) {
        self.toast = Some(message.into());
        self.toast_is_error = is_error;
        self.toast_ticks = TOAST_TICKS;
    }

    fn clamp_cursor(&mut self) {
        let last = self.rows().len() - 1;
        if self.cursor > last {
            self.cursor = last;
        }
    }

    pub fn handle_ui(&mut self, event: UiEvent) {
        match event {
            UiEvent::State(snapshot) => {
                self.snapshot = snapshot;
                self.clamp_cursor();
            }
            UiEvent::Console(ConsoleEvent::FilesRejected { names }) => {
                self.show_toast(
                    format!("Files exceeding the 25MB size limit: {}", names.join(", ")),
                    true,
                );
            }
            UiEvent::Console(ConsoleEvent::SubmissionFailed { error }) => {
                self.show_toast(error, true);
            }
            UiEvent::Console(_) => {}
            UiEvent::Downloaded(path) => {
                self.show_toast(format!("Saved {}", path.display()), false);
            }
            UiEvent::Error(message) => {
                self.show_toast(message, true);
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.toast_ticks > 0 {
            self.toast_ticks -= 1;
            if self.toast_ticks == 0 {
                self.toast = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            InputMode::EditingPath | InputMode::EditingCriteria => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => {
                self.input_buffer.clear();
                self.mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let buffer = std::mem::take(&mut self.input_buffer);
                match self.mode {
                    InputMode::EditingPath => {
                        if !buffer.trim().is_empty() {
                            self.send(Command::AddFiles(vec![PathBuf::from(buffer.trim())]));
                        }
                    }
                    InputMode::EditingCriteria => {
                        self.snapshot.form.criteria = buffer;
                        self.sync_form();
                    }
                    InputMode::Normal => {}
                }
                self.mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.colour.toggle(),
            KeyCode::Char('1') => self.page = Page::TranscribeFiles,
            KeyCode::Char('2') => self.page = Page::SetupDocs,
            KeyCode::Char('3') => self.page = Page::ApiDocs,
            KeyCode::Tab => {
                self.page = cycle(&Page::ALL, self.page, true);
            }
            _ => match self.page {
                Page::TranscribeFiles => self.handle_transcribe_key(key),
                Page::SetupDocs | Page::ApiDocs => self.handle_docs_key(key),
            },
        }
    }

    fn handle_docs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.docs_scroll = self.docs_scroll.saturating_sub(1),
            KeyCode::Down => self.docs_scroll = self.docs_scroll.saturating_add(1),
            KeyCode::PageUp => self.docs_scroll = self.docs_scroll.saturating_sub(10),
            KeyCode::PageDown => self.docs_scroll = self.docs_scroll.saturating_add(10),
            _ => {}
        }
    }

    fn handle_transcribe_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(self.rows().len() - 1);
            }
            KeyCode::PageUp => self.response_scroll = self.response_scroll.saturating_sub(10),
            KeyCode::PageDown => self.response_scroll = self.response_scroll.saturating_add(10),
            KeyCode::Char('a') => {
                self.input_buffer.clear();
                self.mode = InputMode::EditingPath;
            }
            KeyCode::Char('d') => {
                self.send(Command::Download(self.download_dir.clone()));
            }
            KeyCode::Char('s') => self.try_submit(),
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Row::File(index) = self.selected_row() {
                    self.send(Command::RemoveFile(index));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_row(true),
            KeyCode::Left => self.edit_field(false),
            KeyCode::Right => self.edit_field(true),
            _ => {}
        }
    }

    fn try_submit(&mut self) {
        // The trigger is disabled, not erroring, while submission is blocked.
        if self.snapshot.can_submit {
            self.send(Command::Submit);
        }
    }

    fn activate_row(&mut self, forward: bool) {
        match self.selected_row() {
            Row::Submit => self.try_submit(),
            Row::File(_) => {}
            Row::Field(Field::Criteria) => {
                self.input_buffer = self.snapshot.form.criteria.clone();
                self.mode = InputMode::EditingCriteria;
            }
            Row::Field(_) => self.edit_field(forward),
        }
    }

    fn edit_field(&mut self, forward: bool) {
        let Row::Field(field) = self.selected_row() else {
            return;
        };

        let form = &mut self.snapshot.form;
        match field {
            Field::TranscriptionMethod => {
                form.transcription_method =
                    cycle(&TranscriptionMethod::ALL, form.transcription_method, forward);
            }
            Field::ModelSize => {
                form.model_size = cycle(&ModelSize::ALL, form.model_size, forward);
            }
            Field::Diarisation => form.diarisation = !form.diarisation,
            Field::DiarisationMethod => {
                form.diarisation_method =
                    cycle(&DiarisationMethod::ALL, form.diarisation_method, forward);
            }
            Field::NumSpeakers => {
                // No clamping; out-of-range values surface the field error.
                form.num_speakers += if forward { 1 } else { -1 };
            }
            Field::Audit => form.audit = !form.audit,
            Field::Criteria => {}
        }

        self.clamp_cursor();
        self.sync_form();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (App, mpsc::UnboundedReceiver<Command>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(tx, PathBuf::from(".")), rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn select(app: &mut App, row: Row) {
        let position = app
            .rows()
            .iter()
            .position(|r| *r == row)
            .expect("row not visible");
        app.cursor = position;
    }

    #[test]
    fn default_form_shows_every_section() {
        let (app, _rx) = app();

        let rows = app.rows();
        assert_eq!(
            rows,
            vec![
                Row::Field(Field::TranscriptionMethod),
                Row::Field(Field::ModelSize),
                Row::Field(Field::Diarisation),
                Row::Field(Field::DiarisationMethod),
                Row::Field(Field::NumSpeakers),
                Row::Field(Field::Audit),
                Row::Field(Field::Criteria),
                Row::Submit,
            ]
        );
    }

    #[test]
    fn disabling_diarisation_hides_its_fields_but_keeps_their_values() {
        let (mut app, mut rx) = app();
        app.snapshot.form.num_speakers = 7;

        select(&mut app, Row::Field(Field::Diarisation));
        press(&mut app, KeyCode::Enter);

        let fields = visible_fields(&app.snapshot.form);
        assert!(!fields.contains(&Field::DiarisationMethod));
        assert!(!fields.contains(&Field::NumSpeakers));

        match rx.try_recv().unwrap() {
            Command::UpdateForm(form) => {
                assert!(!form.diarisation);
                assert_eq!(form.num_speakers, 7);
            }
            other => panic!("expected form update, got {other:?}"),
        }
    }

    #[test]
    fn speaker_count_edits_are_unclamped() {
        let (mut app, _rx) = app();
        app.snapshot.form.num_speakers = 1;

        select(&mut app, Row::Field(Field::NumSpeakers));
        press(&mut app, KeyCode::Left);

        assert_eq!(app.snapshot.form.num_speakers, 0);
    }

    #[test]
    fn submit_key_is_inert_while_blocked() {
        let (mut app, mut rx) = app();
        app.snapshot.can_submit = false;

        press(&mut app, KeyCode::Char('s'));

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_key_fires_when_allowed() {
        let (mut app, mut rx) = app();
        app.snapshot.can_submit = true;

        press(&mut app, KeyCode::Char('s'));

        assert!(matches!(rx.try_recv().unwrap(), Command::Submit));
    }

    #[test]
    fn theme_toggle_flips_the_context() {
        let (mut app, _rx) = app();
        assert_eq!(app.colour.mode, crate::theme::Mode::Dark);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.colour.mode, crate::theme::Mode::Light);
    }

    #[test]
    fn path_entry_commits_into_an_add_files_command() {
        let (mut app, mut rx) = app();

        press(&mut app, KeyCode::Char('a'));
        for c in "audio.wav".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        match rx.try_recv().unwrap() {
            Command::AddFiles(paths) => assert_eq!(paths, vec![PathBuf::from("audio.wav")]),
            other => panic!("expected add files, got {other:?}"),
        }
        assert!(!app.is_editing_path());
    }

    #[test]
    fn cursor_clamps_when_rows_disappear() {
        let (mut app, _rx) = app();
        app.cursor = app.rows().len() - 1;

        let mut form = app.snapshot.form.clone();
        form.diarisation = false;
        form.audit = false;
        app.handle_ui(UiEvent::State(Snapshot {
            form,
            ..Snapshot::default()
        }));

        assert!(app.cursor < app.rows().len());
        assert_eq!(app.selected_row(), Row::Submit);
    }
}
