// ── Test double for `Platform` ────────────────────────────────────────────────
//
// Records every binding call in order and replays scripted results.  Dispatch
// runs the real window procedure against the fake itself, so a posted quit is
// seen by the next `get_message` exactly as on Windows.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
};

use super::procedure;
use crate::{
    config::Config,
    platform::{
        codes, ClassSpec, DialogKind, Handle, Message, OsResult, Platform, Retrieval, WindowKind,
        WindowSpec,
    },
};

/// One recorded binding call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ModuleHandle,
    LoadCursor,
    RegisterClass {
        name: String,
        instance: Handle,
        cursor: Handle,
        redraw_on_resize: bool,
    },
    CreateWindow {
        kind: CreatedKind,
        text: String,
        position: Option<(i32, i32)>,
        size: (i32, i32),
        instance: Handle,
    },
    ShowWindow(Handle),
    UpdateWindow(Handle),
    MessageBox {
        owner: Option<Handle>,
        text: String,
        title: String,
        kind: DialogKind,
    },
    GetMessage,
    Translate(u32),
    Dispatch(u32),
    DefaultProcedure(u32),
    PostQuit(i32),
}

/// Owned copy of `WindowKind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CreatedKind {
    TopLevel { class_name: String },
    PushButton { parent: Handle, control_id: u16 },
}

/// A scripted `get_message` outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Queued {
    Message(Message),
    Error(u32),
}

pub(crate) struct FakePlatform {
    pub(crate) config: Config,
    module_results: RefCell<VecDeque<OsResult<Handle>>>,
    cursor_result: Cell<OsResult<Handle>>,
    register_result: Cell<OsResult<u16>>,
    create_results: RefCell<VecDeque<OsResult<Handle>>>,
    show_result: Cell<bool>,
    queue: RefCell<VecDeque<Queued>>,
    posted_quit: Cell<Option<i32>>,
    calls: RefCell<Vec<Call>>,
}

impl FakePlatform {
    pub(crate) const MODULE: Handle = Handle(0x40_0000);
    pub(crate) const CURSOR: Handle = Handle(0x10003);
    pub(crate) const MAIN_WINDOW: Handle = Handle(0x2001);
    pub(crate) const BUTTON: Handle = Handle(0x2002);
    pub(crate) const ATOM: u16 = 0xC0DE;
    pub(crate) const DEFAULT_RESULT: isize = 7;

    /// Every call succeeds; the message queue is empty.
    pub(crate) fn new() -> Self {
        Self {
            config: Config::default(),
            module_results: RefCell::new(VecDeque::new()),
            cursor_result: Cell::new(Ok(Self::CURSOR)),
            register_result: Cell::new(Ok(Self::ATOM)),
            create_results: RefCell::new(VecDeque::from([
                Ok(Self::MAIN_WINDOW),
                Ok(Self::BUTTON),
            ])),
            show_result: Cell::new(true),
            queue: RefCell::new(VecDeque::new()),
            posted_quit: Cell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Results of successive `module_handle` calls; once exhausted the call
    /// succeeds with `MODULE`.
    pub(crate) fn with_module_results(self, results: &[OsResult<Handle>]) -> Self {
        self.module_results.borrow_mut().extend(results.iter().copied());
        self
    }

    pub(crate) fn with_cursor_result(self, result: OsResult<Handle>) -> Self {
        self.cursor_result.set(result);
        self
    }

    pub(crate) fn with_register_result(self, result: OsResult<u16>) -> Self {
        self.register_result.set(result);
        self
    }

    /// Results of successive `create_window` calls (main window, then button).
    pub(crate) fn with_create_results(self, results: &[OsResult<Handle>]) -> Self {
        *self.create_results.borrow_mut() = results.iter().copied().collect();
        self
    }

    pub(crate) fn with_show_result(self, shown: bool) -> Self {
        self.show_result.set(shown);
        self
    }

    pub(crate) fn with_queue(self, queued: &[Queued]) -> Self {
        self.queue.borrow_mut().extend(queued.iter().copied());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Messages still waiting in the scripted queue.
    pub(crate) fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

/// A message addressed to the main window.
pub(crate) fn message(code: u32, wparam: usize) -> Message {
    Message {
        window: FakePlatform::MAIN_WINDOW,
        code,
        wparam,
        ..Message::default()
    }
}

impl Platform for FakePlatform {
    fn module_handle(&self) -> OsResult<Handle> {
        self.record(Call::ModuleHandle);
        self.module_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(Self::MODULE))
    }

    fn load_arrow_cursor(&self) -> OsResult<Handle> {
        self.record(Call::LoadCursor);
        self.cursor_result.get()
    }

    fn register_class(&self, class: &ClassSpec<'_>) -> OsResult<u16> {
        self.record(Call::RegisterClass {
            name: class.name.to_owned(),
            instance: class.instance,
            cursor: class.cursor,
            redraw_on_resize: class.redraw_on_resize,
        });
        self.register_result.get()
    }

    fn create_window(&self, spec: &WindowSpec<'_>) -> OsResult<Handle> {
        let kind = match spec.kind {
            WindowKind::TopLevel { class_name } => CreatedKind::TopLevel {
                class_name: class_name.to_owned(),
            },
            WindowKind::PushButton { parent, control_id } => {
                CreatedKind::PushButton { parent, control_id }
            }
        };
        self.record(Call::CreateWindow {
            kind,
            text: spec.text.to_owned(),
            position: spec.position,
            size: spec.size,
            instance: spec.instance,
        });
        self.create_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(8))
    }

    fn show_window(&self, window: Handle) -> bool {
        self.record(Call::ShowWindow(window));
        self.show_result.get()
    }

    fn update_window(&self, window: Handle) -> bool {
        self.record(Call::UpdateWindow(window));
        true
    }

    fn message_box(&self, owner: Option<Handle>, text: &str, title: &str, kind: DialogKind) {
        self.record(Call::MessageBox {
            owner,
            text: text.to_owned(),
            title: title.to_owned(),
            kind,
        });
    }

    fn get_message(&self, message: &mut Message) -> Retrieval {
        self.record(Call::GetMessage);

        if let Some(exit_code) = self.posted_quit.take() {
            *message = Message {
                code: codes::WM_QUIT,
                wparam: exit_code as usize,
                ..Message::default()
            };
            return Retrieval::Quit;
        }

        match self.queue.borrow_mut().pop_front() {
            Some(Queued::Message(m)) => {
                *message = m;
                Retrieval::Message
            }
            Some(Queued::Error(code)) => Retrieval::Error(code),
            None => panic!("message queue exhausted without a quit"),
        }
    }

    fn translate_message(&self, message: &Message) -> bool {
        self.record(Call::Translate(message.code));
        false
    }

    fn dispatch_message(&self, message: &Message) -> isize {
        self.record(Call::Dispatch(message.code));
        procedure::handle(self, &self.config, message)
    }

    fn default_procedure(&self, message: &Message) -> isize {
        self.record(Call::DefaultProcedure(message.code));
        Self::DEFAULT_RESULT
    }

    fn post_quit(&self, exit_code: i32) {
        self.record(Call::PostQuit(exit_code));
        self.posted_quit.set(Some(exit_code));
    }
}
