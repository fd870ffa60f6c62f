use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, text_input};
use iced::{application, Alignment, Element, Length, Task, Theme};
use rfd::AsyncFileDialog;

use crate::launcher::{Launcher, SystemLauncher};
use crate::message::Message;
use crate::model::scanner::scan_folder;
use crate::model::{ResultsTable, RowId, ScanReport, SortColumn, SortOrder};
use crate::views::results_table;

const APP_TITLE: &str = "Image Inspector";
const DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(400);

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanPhase {
    Idle,
    Scanning,
}

pub struct App {
    folder_input: String,
    table: ResultsTable,
    phase: ScanPhase,
    status: String,
    last_error: Option<String>,
    sort: Option<(SortColumn, SortOrder)>,
    last_press: Option<(RowId, Instant)>,
    launcher: Box<dyn Launcher>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            folder_input: String::new(),
            table: ResultsTable::default(),
            phase: ScanPhase::Idle,
            status: String::from("Select a folder to scan"),
            last_error: None,
            sort: None,
            last_press: None,
            launcher: Box::new(SystemLauncher),
        }
    }
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseFolder => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FolderPicked,
            ),
            Message::FolderPicked(Some(folder)) => {
                self.folder_input = folder.display().to_string();
                Task::none()
            }
            Message::FolderPicked(None) => Task::none(),
            Message::FolderInputChanged(value) => {
                self.folder_input = value;
                Task::none()
            }
            Message::ScanRequested => self.begin_scan(),
            Message::ScanFinished(report) => {
                self.finish_scan(report);
                Task::none()
            }
            Message::RowPressed(id) => {
                self.handle_row_press(id);
                Task::none()
            }
            Message::SortRequested(column) => {
                let order = match self.sort {
                    Some((current, order)) if current == column => order.toggled(),
                    _ => SortOrder::Ascending,
                };
                self.sort = Some((column, order));
                self.table.sort(column, order);
                Task::none()
            }
        }
    }

    /// One scan at a time: a request while scanning is rejected, and the view
    /// plus the row mapping are cleared before the worker starts so results
    /// from the previous scan can never interleave with new ones.
    fn begin_scan(&mut self) -> Task<Message> {
        if self.phase == ScanPhase::Scanning {
            self.status = String::from("A scan is already running.");
            return Task::none();
        }

        let folder = self.folder_input.trim();
        if folder.is_empty() {
            self.last_error = Some(String::from("Please select a folder to scan."));
            return Task::none();
        }

        let root = PathBuf::from(folder);
        if !root.is_dir() {
            self.last_error = Some(format!("{} is not a readable folder.", root.display()));
            return Task::none();
        }

        self.table.clear();
        self.last_press = None;
        self.last_error = None;
        self.phase = ScanPhase::Scanning;
        self.status = format!("Scanning {}...", root.display());

        Task::perform(async move { scan_folder(&root) }, Message::ScanFinished)
    }

    fn finish_scan(&mut self, report: ScanReport) {
        self.phase = ScanPhase::Idle;

        self.status = if report.matched() == 0 {
            String::from("No supported image files were found in the selected folder.")
        } else {
            format!("Found {} images.", report.records.len())
        };

        self.last_error = if report.failures.is_empty() {
            None
        } else {
            Some(
                report
                    .failures
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        };

        for record in report.records {
            self.table.insert(record);
        }
        if let Some((column, order)) = self.sort {
            self.table.sort(column, order);
        }
    }

    fn handle_row_press(&mut self, id: RowId) {
        let now = Instant::now();
        let is_double = matches!(
            self.last_press,
            Some((last, at)) if last == id && now.duration_since(at) <= DOUBLE_PRESS_WINDOW
        );

        if is_double {
            self.last_press = None;
            self.activate_row(id);
        } else {
            self.last_press = Some((id, now));
        }
    }

    fn activate_row(&mut self, id: RowId) {
        let Some(path) = self.table.path_for(id) else {
            return;
        };
        if let Err(err) = self.launcher.open(path) {
            log::error!("{err}");
            self.last_error = Some(err.to_string());
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut scan_button = button("Scan Images");
        if self.phase == ScanPhase::Idle {
            scan_button = scan_button.on_press(Message::ScanRequested);
        }

        let controls = row![
            text("Select Folder:"),
            text_input("Folder to scan", &self.folder_input)
                .on_input(Message::FolderInputChanged)
                .width(Length::FillPortion(3)),
            button("Browse").on_press(Message::BrowseFolder),
            scan_button,
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let table_content: Element<'_, Message> = if self.table.is_empty() {
            let placeholder = match self.phase {
                ScanPhase::Scanning => "Scanning...",
                ScanPhase::Idle => "Scan a folder to list its images",
            };
            text(placeholder).into()
        } else {
            results_table(&self.table)
        };

        let mut content = column![
            controls,
            container(table_content)
                .padding(16)
                .width(Length::Fill)
                .height(Length::Fill),
            text(&self.status).size(14),
        ]
        .spacing(16);

        if let Some(error) = &self.last_error {
            content = content.push(text(error).size(14).wrapping(Wrapping::Word));
        }

        content.padding(20).into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
