use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use aqua_core::IdentityService;
use aqua_core::calc::common::liters_to_gallons;
use aqua_core::calc::{
    DietConfig, DietResult, StockingConfig, StockingResult, StockingWorksheet, TankDimensions,
    daily_feed, water_volume,
};
use aqua_core::reset::{ResetFlow, ResetPhase, validate_email, validate_new_password};

use crate::bridge::{Bridge, UiMsg};
use crate::config::Settings;
use crate::screens;
use crate::utils::{parse_required_decimal, parse_required_u32, percent_to_factor};

/// Which screen is currently on top of the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Calculators,
    ResetPassword,
}

/// Explicit navigation stack. `reset_to` is the "clear history" redirect.
#[derive(Debug)]
pub struct Nav {
    stack: Vec<Screen>,
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

impl Nav {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Calculators],
        }
    }

    pub fn current(&self) -> Screen {
        *self.stack.last().unwrap_or(&Screen::Calculators)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes a screen unless it is already on top.
    pub fn push(&mut self, screen: Screen) {
        if self.current() != screen {
            self.stack.push(screen);
        }
    }

    /// Pops back one screen; the root screen always stays.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Replaces the whole stack with `screen`, discarding all history.
    pub fn reset_to(&mut self, screen: Screen) {
        self.stack.clear();
        self.stack.push(screen);
    }
}

/// The calculator tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorTab {
    #[default]
    WaterVolume,
    FishStocking,
    Diet,
}

impl CalculatorTab {
    pub fn all() -> &'static [CalculatorTab] {
        &[
            CalculatorTab::WaterVolume,
            CalculatorTab::FishStocking,
            CalculatorTab::Diet,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalculatorTab::WaterVolume => "Water Volume",
            CalculatorTab::FishStocking => "Fish Stocking",
            CalculatorTab::Diet => "Diet",
        }
    }
}

/// Which fish-stocking sub-calculator is active. A pure view-state toggle:
/// selecting one deselects the other, Back returns to the choice screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FishCalcChoice {
    #[default]
    None,
    ByVolume,
    ByDimensions,
}

impl FishCalcChoice {
    pub fn select(&mut self, variant: FishCalcChoice) {
        *self = variant;
    }

    pub fn clear(&mut self) {
        *self = FishCalcChoice::None;
    }
}

/// Water volume result prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeOutcome {
    pub liters: Decimal,
    pub gallons: Decimal,
}

/// Water volume form.
#[derive(Debug, Clone)]
pub struct VolumeForm {
    pub length_cm: String,
    pub width_cm: String,
    pub height_cm: String,
    pub fill_percent: String,
    pub errors: Vec<String>,
    pub result: Option<VolumeOutcome>,
}

impl Default for VolumeForm {
    fn default() -> Self {
        Self {
            length_cm: String::new(),
            width_cm: String::new(),
            height_cm: String::new(),
            fill_percent: "90".to_string(),
            errors: Vec::new(),
            result: None,
        }
    }
}

impl VolumeForm {
    pub fn calculate(&mut self) {
        self.errors.clear();
        self.result = None;

        let length = parse_required_decimal("Length", &self.length_cm, &mut self.errors);
        let width = parse_required_decimal("Width", &self.width_cm, &mut self.errors);
        let height = parse_required_decimal("Height", &self.height_cm, &mut self.errors);
        let fill = parse_required_decimal("Fill", &self.fill_percent, &mut self.errors);
        if !self.errors.is_empty() {
            return;
        }

        let dims = TankDimensions {
            length_cm: length.unwrap(),
            width_cm: width.unwrap(),
            height_cm: height.unwrap(),
        };
        match water_volume(&dims, percent_to_factor(fill.unwrap())) {
            Ok(liters) => {
                self.result = Some(VolumeOutcome {
                    liters,
                    gallons: liters_to_gallons(liters),
                });
            }
            Err(e) => self.errors.push(e.to_string()),
        }
    }
}

/// Fish stocking from a known water volume.
#[derive(Debug, Clone, Default)]
pub struct StockingByVolumeForm {
    pub volume_liters: String,
    pub adult_length_cm: String,
    pub errors: Vec<String>,
    pub result: Option<StockingResult>,
}

impl StockingByVolumeForm {
    pub fn calculate(&mut self, config: &StockingConfig) {
        self.errors.clear();
        self.result = None;

        let volume = parse_required_decimal("Volume", &self.volume_liters, &mut self.errors);
        let length =
            parse_required_decimal("Adult length", &self.adult_length_cm, &mut self.errors);
        if !self.errors.is_empty() {
            return;
        }

        match StockingWorksheet::new(config.clone())
            .and_then(|ws| ws.by_volume(volume.unwrap(), length.unwrap()))
        {
            Ok(result) => self.result = Some(result),
            Err(e) => self.errors.push(e.to_string()),
        }
    }
}

/// Fish stocking from tank dimensions.
#[derive(Debug, Clone)]
pub struct StockingByDimensionsForm {
    pub length_cm: String,
    pub width_cm: String,
    pub height_cm: String,
    pub fill_percent: String,
    pub adult_length_cm: String,
    pub errors: Vec<String>,
    pub result: Option<StockingResult>,
}

impl Default for StockingByDimensionsForm {
    fn default() -> Self {
        Self {
            length_cm: String::new(),
            width_cm: String::new(),
            height_cm: String::new(),
            fill_percent: "90".to_string(),
            adult_length_cm: String::new(),
            errors: Vec::new(),
            result: None,
        }
    }
}

impl StockingByDimensionsForm {
    pub fn calculate(&mut self, config: &StockingConfig) {
        self.errors.clear();
        self.result = None;

        let length = parse_required_decimal("Length", &self.length_cm, &mut self.errors);
        let width = parse_required_decimal("Width", &self.width_cm, &mut self.errors);
        let height = parse_required_decimal("Height", &self.height_cm, &mut self.errors);
        let fill = parse_required_decimal("Fill", &self.fill_percent, &mut self.errors);
        let adult =
            parse_required_decimal("Adult length", &self.adult_length_cm, &mut self.errors);
        if !self.errors.is_empty() {
            return;
        }

        let dims = TankDimensions {
            length_cm: length.unwrap(),
            width_cm: width.unwrap(),
            height_cm: height.unwrap(),
        };
        match StockingWorksheet::new(config.clone()).and_then(|ws| {
            ws.by_dimensions(&dims, percent_to_factor(fill.unwrap()), adult.unwrap())
        }) {
            Ok(result) => self.result = Some(result),
            Err(e) => self.errors.push(e.to_string()),
        }
    }
}

/// Daily feed form.
#[derive(Debug, Clone, Default)]
pub struct DietForm {
    pub body_weight_g: String,
    pub fish_count: String,
    pub errors: Vec<String>,
    pub result: Option<DietResult>,
}

impl DietForm {
    pub fn calculate(&mut self, config: &DietConfig) {
        self.errors.clear();
        self.result = None;

        let weight = parse_required_decimal("Body weight", &self.body_weight_g, &mut self.errors);
        let count = parse_required_u32("Fish count", &self.fish_count, &mut self.errors);
        if !self.errors.is_empty() {
            return;
        }

        match daily_feed(config, weight.unwrap(), count.unwrap()) {
            Ok(result) => self.result = Some(result),
            Err(e) => self.errors.push(e.to_string()),
        }
    }
}

/// Password reset screen state. Recreated whenever the screen is entered or
/// disposed; the generation tags in-flight results so late ones are dropped.
#[derive(Debug)]
pub struct ResetForm {
    pub email: String,
    pub password: String,
    pub confirmation: String,
    pub flow: ResetFlow,
    generation: u64,
}

impl ResetForm {
    fn new(generation: u64) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirmation: String::new(),
            flow: ResetFlow::new(),
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Main application state.
pub struct AquaApp {
    pub nav: Nav,
    pub tab: CalculatorTab,
    pub fish_choice: FishCalcChoice,
    pub volume_form: VolumeForm,
    pub stocking_by_volume: StockingByVolumeForm,
    pub stocking_by_dimensions: StockingByDimensionsForm,
    pub diet_form: DietForm,
    pub reset: ResetForm,
    pub settings: Settings,
    bridge: Bridge,
    service: Arc<dyn IdentityService>,
    redirect_scheduled: bool,
    next_generation: u64,
    // Keeps the tokio runtime alive for as long as the UI runs.
    _runtime: tokio::runtime::Runtime,
}

impl AquaApp {
    pub fn new(
        ctx: egui::Context,
        runtime: tokio::runtime::Runtime,
        service: Arc<dyn IdentityService>,
        settings: Settings,
    ) -> Self {
        let bridge = Bridge::new(runtime.handle().clone(), ctx);
        Self {
            nav: Nav::new(),
            tab: CalculatorTab::default(),
            fish_choice: FishCalcChoice::default(),
            volume_form: VolumeForm::default(),
            stocking_by_volume: StockingByVolumeForm::default(),
            stocking_by_dimensions: StockingByDimensionsForm::default(),
            diet_form: DietForm::default(),
            reset: ResetForm::new(0),
            settings,
            bridge,
            service,
            redirect_scheduled: false,
            next_generation: 1,
            _runtime: runtime,
        }
    }

    /// Switches calculator tabs. The fish sub-calculator choice is local to
    /// a tab visit, so it resets on every switch.
    pub fn switch_tab(&mut self, tab: CalculatorTab) {
        if self.tab != tab {
            self.tab = tab;
            self.fish_choice.clear();
        }
    }

    pub fn open_reset_screen(&mut self) {
        self.nav.push(Screen::ResetPassword);
    }

    /// Back from the reset screen: the flow state is screen-local, so it is
    /// destroyed with the screen.
    pub fn leave_reset_screen(&mut self) {
        self.nav.pop();
        self.dispose_reset_form();
    }

    fn dispose_reset_form(&mut self) {
        self.reset = ResetForm::new(self.next_generation);
        self.next_generation += 1;
        self.redirect_scheduled = false;
    }

    /// Phase 1 button: validate the email, then ask the service for a reset
    /// link. A validation failure never reaches the network.
    pub fn start_reset_request(&mut self) {
        if self.reset.flow.is_loading() {
            return;
        }
        if let Err(err) = validate_email(&self.reset.email) {
            self.reset.flow.fail_validation(err);
            return;
        }
        self.reset.flow.begin_operation();
        self.bridge.spawn_reset(
            self.service.clone(),
            self.reset.email.trim().to_string(),
            self.reset.generation,
        );
    }

    /// Phase 2 button: validate the new password locally, then submit it.
    pub fn start_password_update(&mut self) {
        if self.reset.flow.is_loading() {
            return;
        }
        if let Err(err) = validate_new_password(&self.reset.password, &self.reset.confirmation) {
            self.reset.flow.fail_validation(err);
            return;
        }
        self.reset.flow.begin_operation();
        self.bridge.spawn_update(
            self.service.clone(),
            self.reset.password.clone(),
            self.reset.generation,
        );
    }

    /// Applies one message from the async bridge. Results for a disposed
    /// reset form carry a stale generation and are dropped.
    fn apply(&mut self, msg: UiMsg) {
        match msg {
            UiMsg::ResetFinished { generation, result } => {
                if generation == self.reset.generation {
                    self.reset.flow.finish_request(result);
                }
            }
            UiMsg::UpdateFinished { generation, result } => {
                if generation != self.reset.generation {
                    return;
                }
                self.reset.flow.finish_update(result);
                if self.reset.flow.phase() == ResetPhase::PasswordUpdated
                    && !self.redirect_scheduled
                {
                    self.bridge.schedule_redirect(generation);
                    self.redirect_scheduled = true;
                }
            }
            UiMsg::RedirectHome { generation } => {
                if generation == self.reset.generation {
                    self.go_home();
                }
            }
        }
    }

    /// The post-update redirect: home screen, history cleared.
    fn go_home(&mut self) {
        info!("redirecting to home");
        self.nav.reset_to(Screen::Calculators);
        self.dispose_reset_form();
    }
}

impl eframe::App for AquaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for msg in self.bridge.drain() {
            self.apply(msg);
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reset Password…").clicked() {
                        self.open_reset_screen();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.nav.current() {
            Screen::Calculators => screens::CalculatorsScreen::show(self, ui),
            Screen::ResetPassword => screens::ResetPasswordScreen::show(self, ui),
        });
    }
}
