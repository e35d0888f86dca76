use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use habit_core::HabitDay;
use habit_core::model::{HabitId, HabitsInfo};
use habit_core::time::fixed_clock;
use services::{HabitDayService, HabitsApi, InMemoryHabitsApi};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::habit::{render_habit_day, use_habit_day};
use crate::views::{HabitView, HomeView};

#[derive(Clone)]
struct TestApp {
    initial_day: HabitDay,
    habit_days: Arc<HabitDayService>,
}

impl UiApp for TestApp {
    fn initial_day(&self) -> HabitDay {
        self.initial_day
    }

    fn habit_days(&self) -> Arc<HabitDayService> {
        Arc::clone(&self.habit_days)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Day(String),
    /// The day screen, with its toggle action handed back to the test.
    Interactive(String),
}

/// Where an `Interactive` view registers its toggle callback.
#[derive(Clone, Default)]
pub struct ToggleSlot(Rc<RefCell<Option<Callback<HabitId>>>>);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    slot: ToggleSlot,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.slot.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Day(date) => rsx! { HabitView { date } },
        ViewKind::Interactive(date) => {
            let day = HabitDay::parse(&date).expect("valid test date");
            rsx! { InteractiveDay { day } }
        }
    }
}

#[component]
fn InteractiveDay(day: HabitDay) -> Element {
    let handle = use_habit_day(day);
    let slot = use_context::<ToggleSlot>();
    use_hook(|| *slot.0.borrow_mut() = Some(handle.toggle));
    let clock = use_context::<AppContext>().habit_days().clock();
    render_habit_day(day, handle, &clock)
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryHabitsApi,
    pub today: HabitDay,
    slot: ToggleSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let spawned requests resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drain().await;
    }

    pub async fn drain(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Call the toggle action of an `Interactive` view, as a checkbox press does.
    pub fn toggle(&self, id: &str) {
        let toggle = self.slot.0.borrow().clone().expect("toggle registered");
        let id = HabitId::new(id);
        self.dom.in_runtime(|| toggle.call(id));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness backed by an `InMemoryHabitsApi` holding `info` for today.
pub fn setup_view_harness(view: ViewKind, info: HabitsInfo) -> ViewHarness {
    let clock = fixed_clock();
    let api = InMemoryHabitsApi::new(clock);
    let today = HabitDay::today(&clock);
    api.insert_day(today, info);
    let mut harness = setup_view_harness_with_api(view, Arc::new(api.clone()));
    harness.api = api;
    harness
}

pub fn setup_view_harness_with_api(view: ViewKind, api: Arc<dyn HabitsApi>) -> ViewHarness {
    let clock = fixed_clock();
    let today = HabitDay::today(&clock);
    let app = Arc::new(TestApp {
        initial_day: today,
        habit_days: Arc::new(HabitDayService::new(clock, api)),
    });

    let slot = ToggleSlot::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            slot: slot.clone(),
        },
    );

    ViewHarness {
        dom,
        api: InMemoryHabitsApi::new(clock),
        today,
        slot,
    }
}
