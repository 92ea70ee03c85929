//! Service Object snippet generator.
//!
//! Renders the Ruby `Subscriptions::<ClassName>` service from a handful of
//! switches. The output is plain text; nothing is written to disk.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    entities::bookmark::BookmarkDraft, error::DomainError, validation::DomainValidator,
    value_objects::ErrorHandling,
};

pub const DEFAULT_CLASS_NAME: &str = "CreateSubscription";

/// Generator switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOptions {
    pub class_name: String,
    pub error_handling: ErrorHandling,
    pub use_transaction: bool,
    pub send_email: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            error_handling: ErrorHandling::ResultMonad,
            use_transaction: true,
            send_email: true,
        }
    }
}

impl ServiceOptions {
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_class_name(&self.class_name)
    }

    /// Path of the generated file, relative to the Rails root.
    pub fn file_path(&self) -> String {
        format!(
            "app/services/subscriptions/{}.rb",
            self.class_name.to_lowercase()
        )
    }

    pub fn bookmark_title(&self) -> String {
        format!("Service Object: {}", self.class_name)
    }
}

/// A rendered snippet together with the options it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedService {
    pub path: String,
    pub code: String,
    pub options: ServiceOptions,
}

impl GeneratedService {
    /// Bookmark payload: `{ "code", "options" }`.
    pub fn bookmark_draft(&self) -> BookmarkDraft {
        BookmarkDraft::new(self.options.bookmark_title())
            .with_data(json!({ "code": self.code, "options": self.options }))
    }
}

/// Render the service object for `options`.
pub fn generate(options: &ServiceOptions) -> Result<GeneratedService, DomainError> {
    options.validate()?;
    Ok(GeneratedService {
        path: options.file_path(),
        code: render(options),
        options: options.clone(),
    })
}

fn render(options: &ServiceOptions) -> String {
    let monad = options.error_handling == ErrorHandling::ResultMonad;
    let success = if monad {
        "OpenStruct.new(success?: true, data: subscription)"
    } else {
        "subscription"
    };

    let mut out = Vec::<String>::new();
    let mut line = |indent: usize, text: &str| out.push(format!("{}{}", " ".repeat(indent), text));

    line(0, &format!("# {}", options.file_path()));
    line(0, "module Subscriptions");
    line(2, &format!("class {}", options.class_name));
    line(4, "# Standard interface for all services");
    line(4, "def self.call(**args)");
    line(6, "new(**args).call");
    line(4, "end");
    line(4, "def initialize(user:, plan_id:, payment_method:)");
    line(6, "@user = user");
    line(6, "@plan_id = plan_id");
    line(6, "@payment_method = payment_method");
    line(4, "end");

    // ── call ────────────────────────────────────────────────────────────────
    line(4, "def call");
    if monad {
        line(6, r#"return OpenStruct.new(success?: false, error: "Invalid Plan") unless valid_plan?"#);
    } else {
        line(6, r#"raise "Invalid Plan" unless valid_plan?"#);
    }

    if options.use_transaction {
        line(6, "ActiveRecord::Base.transaction do");
        line(8, "subscription = @user.subscriptions.create!(plan_id: @plan_id)");
        line(8, "charge_result = PaymentGateway.charge(@payment_method, plan_price)");
        line(8, "unless charge_result.success?");
        line(10, "raise ActiveRecord::Rollback, charge_result.error");
        line(8, "end");
        if options.send_email {
            line(8, "SubscriptionMailer.welcome(@user).deliver_later");
        }
        line(8, success);
        line(6, "end");
    } else {
        line(6, "subscription = @user.subscriptions.create!(plan_id: @plan_id)");
        line(6, "charge_result = PaymentGateway.charge(@payment_method, plan_price)");
        if monad {
            line(
                6,
                "return OpenStruct.new(success?: false, error: charge_result.error) unless charge_result.success?",
            );
        } else {
            line(6, "raise charge_result.error unless charge_result.success?");
        }
        if options.send_email {
            line(6, "SubscriptionMailer.welcome(@user).deliver_later");
        }
        line(6, success);
    }

    if monad {
        line(4, "rescue StandardError => e");
        line(6, "OpenStruct.new(success?: false, error: e.message)");
    }
    line(4, "end");

    line(4, "private");
    line(4, "def valid_plan?");
    line(6, "Plan.exists?(@plan_id)");
    line(4, "end");
    line(4, "def plan_price");
    line(6, "Plan.find(@plan_id).price");
    line(4, "end");
    line(2, "end");
    line(0, "end");

    out.join("\n")
}
