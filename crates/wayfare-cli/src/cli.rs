//! Command handlers bridging CLI arguments to the core controllers.
//!
//! Each handler drives the same screen controllers a graphical front end
//! would: calendar days are fed through the wizard's date picker, guests
//! through the invite list, and submissions go through the busy-guarded
//! controller methods. The handlers only translate arguments in and render
//! markdown out.

use anyhow::{Context, Result};
use wayfare_core::{
    clients::CurrentTripStore,
    display::{Guests, Links, Schedule},
    ActivitiesController, Bootstrap, DetailsController, HomeController, LoadOutcome, LocalServer,
    TripController, WizardOverlay,
};

use crate::args::{
    ActivityAddArgs, ActivityCommands, GuestCommands, LinkAddArgs, LinkCommands, TripCommands,
    TripNewArgs, TripUpdateArgs,
};
use crate::renderer::TerminalRenderer;

/// CLI command executor holding the local server and renderer.
pub struct Cli {
    server: LocalServer,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Creates a new executor.
    pub fn new(server: LocalServer, renderer: TerminalRenderer) -> Self {
        Self { server, renderer }
    }

    /// Dispatches a `trip` subcommand.
    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::New(args) => self.trip_new(args).await,
            TripCommands::Show => self.trip_show().await,
            TripCommands::Update(args) => self.trip_update(args).await,
            TripCommands::Forget => self.trip_forget().await,
        }
    }

    /// Dispatches an `activity` subcommand.
    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Add(args) => self.activity_add(args).await,
            ActivityCommands::List => self.activity_list().await,
        }
    }

    /// Dispatches a `link` subcommand.
    pub async fn handle_link_command(&self, command: LinkCommands) -> Result<()> {
        match command {
            LinkCommands::Add(args) => self.link_add(args).await,
            LinkCommands::List => self.link_list().await,
        }
    }

    /// Dispatches a `guest` subcommand.
    pub async fn handle_guest_command(&self, command: GuestCommands) -> Result<()> {
        match command {
            GuestCommands::List => self.guest_list().await,
        }
    }

    /// Shows the current trip, or a hint when there is none.
    pub async fn trip_show(&self) -> Result<()> {
        match HomeController::bootstrap(&self.server, &self.server).await {
            Bootstrap::Resume(trip) => {
                let mut controller = TripController::new(trip.id);
                controller.load(&self.server).await?;
                self.renderer
                    .render(&format!("# Trip {}\n{}\n", trip.id, controller.when()))
            }
            Bootstrap::Fresh => self
                .renderer
                .render("No trip planned yet. Start one with `wayfare trip new`.\n"),
        }
    }

    async fn trip_new(&self, args: TripNewArgs) -> Result<()> {
        let mut home = HomeController::new();

        let wizard = home.wizard_mut();
        wizard.set_destination(&args.destination);
        wizard.open_overlay(WizardOverlay::Calendar);
        for day in args.days {
            wizard.select_day(day);
        }
        wizard.close_overlay();

        // First press validates the details and moves to the guest step.
        home.submit(&self.server, &self.server).await?;

        let wizard = home.wizard_mut();
        wizard.open_overlay(WizardOverlay::GuestList);
        for email in &args.invites {
            wizard.add_guest(email)?;
        }
        wizard.close_overlay();

        let trip_id = home
            .submit(&self.server, &self.server)
            .await?
            .context("Trip creation did not run")?;

        let mut controller = TripController::new(trip_id);
        controller.load(&self.server).await?;
        self.renderer
            .render(&format!("**Trip created.** {}\n", controller.when()))
    }

    async fn trip_update(&self, args: TripUpdateArgs) -> Result<()> {
        let trip_id = self.require_current_trip().await?;

        let mut controller = TripController::new(trip_id);
        if controller.load(&self.server).await? == LoadOutcome::NotFound {
            self.server.clear().await?;
            anyhow::bail!("The saved trip no longer exists; start over with `wayfare trip new`");
        }

        let screen = controller.screen_mut();
        screen.open_update_trip();
        screen.set_destination(&args.destination);
        screen.open_update_calendar();
        for day in args.days {
            screen.select_day(day);
        }
        screen.close_overlay();

        controller.submit_update(&self.server).await?;
        self.renderer
            .render(&format!("**Trip updated.** {}\n", controller.when()))
    }

    async fn trip_forget(&self) -> Result<()> {
        self.server.clear().await?;
        self.renderer.render("Current trip forgotten.\n")
    }

    async fn activity_add(&self, args: ActivityAddArgs) -> Result<()> {
        let trip_id = self.require_current_trip().await?;
        let mut controller = ActivitiesController::new(trip_id);

        let form = controller.form_mut();
        form.open_form();
        form.set_title(&args.title);
        form.set_hour(&args.hour);
        form.open_date_picker();
        form.pick_day(args.day);
        form.close_overlay();

        let now = jiff::Zoned::now().datetime();
        controller.submit(&self.server, now).await?;

        self.renderer.render(&format!(
            "**Activity added.**\n\n{}",
            Schedule(controller.schedule())
        ))
    }

    async fn activity_list(&self) -> Result<()> {
        let trip_id = self.require_current_trip().await?;
        let mut controller = ActivitiesController::new(trip_id);

        let now = jiff::Zoned::now().datetime();
        controller.load(&self.server, now).await?;

        self.renderer
            .render(&Schedule(controller.schedule()).to_string())
    }

    async fn link_add(&self, args: LinkAddArgs) -> Result<()> {
        let trip_id = self.require_current_trip().await?;
        let mut controller = DetailsController::new(trip_id);

        controller.open_link_form();
        controller.set_link_title(&args.title);
        controller.set_link_url(&args.url);
        controller.submit_link(&self.server).await?;

        self.renderer.render(&format!(
            "**Link saved.**\n\n{}",
            Links(controller.links())
        ))
    }

    async fn link_list(&self) -> Result<()> {
        let trip_id = self.require_current_trip().await?;
        let mut controller = DetailsController::new(trip_id);
        controller.load(&self.server, &self.server).await?;

        self.renderer.render(&Links(controller.links()).to_string())
    }

    async fn guest_list(&self) -> Result<()> {
        let trip_id = self.require_current_trip().await?;
        let mut controller = DetailsController::new(trip_id);
        controller.load(&self.server, &self.server).await?;

        self.renderer
            .render(&Guests(controller.participants()).to_string())
    }

    async fn require_current_trip(&self) -> Result<u64> {
        self.server
            .get()
            .await?
            .context("No trip planned yet. Start one with `wayfare trip new`")
    }
}
