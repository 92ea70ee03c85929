//! Report sections and section search.

use serde::Serialize;
use serde_json::json;

use crate::domain::{entities::bookmark::BookmarkDraft, error::DomainError};

/// Words per minute used for read-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// One chapter of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_content: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_sample: Option<&'static str>,
}

impl ReportSection {
    /// Estimated minutes to read the full content, rounded up and never
    /// below one.
    ///
    /// Sections without full content count as one page of
    /// [`WORDS_PER_MINUTE`] words.
    pub fn read_time_minutes(&self) -> usize {
        let words = self
            .full_content
            .map_or(WORDS_PER_MINUTE, |c| c.split_whitespace().count());
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }

    /// The part of the title after a `": "` separator, or the whole title
    /// when there is none. `"4.4 Conclusion: Product vs. Data"` becomes
    /// `"Product vs. Data"`; `"5.1 Service Objects"` is returned unchanged.
    pub fn subject(&self) -> &'static str {
        match self.title.split_once(": ") {
            Some((_, rest)) if !rest.is_empty() => rest,
            _ => self.title,
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.excerpt.to_lowercase().contains(&needle)
    }

    /// Bookmark keyed by section id, carrying the display title.
    pub fn bookmark_draft(&self, note: Option<&str>) -> BookmarkDraft {
        let draft = BookmarkDraft::new(self.id).with_data(json!({ "title": self.title }));
        match note {
            Some(note) => draft.with_note(note),
            None => draft,
        }
    }
}

pub fn all() -> &'static [ReportSection] {
    REPORT_SECTIONS
}

pub fn find(id: &str) -> Result<&'static ReportSection, DomainError> {
    REPORT_SECTIONS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| DomainError::UnknownSection(id.to_string()))
}

/// Case-insensitive match on title or excerpt. A blank query returns
/// every section.
pub fn search(query: &str) -> Vec<&'static ReportSection> {
    REPORT_SECTIONS.iter().filter(|s| s.matches(query)).collect()
}

/// `(id, title)` pairs in report order.
pub fn table_of_contents() -> Vec<(&'static str, &'static str)> {
    REPORT_SECTIONS.iter().map(|s| (s.id, s.title)).collect()
}

pub static REPORT_SECTIONS: &[ReportSection] = &[
    ReportSection {
        id: "conclusion-product-vs-data",
        title: "4.4 Conclusion: Product vs. Data",
        excerpt: "The consensus in 2025 is that Ruby is optimized for Product Engineering, while \
                  Python is optimized for Data Engineering. Ruby's syntax facilitates \"beautiful \
                  code\" that serves as documentation, whereas Python's syntax facilitates the \
                  \"obvious solution\" for computational tasks.",
        full_content: Some(
            "The consensus in 2025 is that Ruby is optimized for Product Engineering: building \
             complex logic, user-facing features, and DSLs that describe business rules. Python \
             is optimized for Data Engineering: scripting, processing pipelines, and wrapping \
             C/C++ libraries (NumPy/PyTorch).\n\n\
             Ruby's syntax facilitates the creation of \"beautiful code\" that serves as \
             documentation, while Python's syntax facilitates the \"obvious solution\" for \
             computational tasks. This fundamental difference in philosophy dictates where each \
             language shines. Ruby, with Rails, excels in crafting intricate web applications \
             where clarity of business logic is paramount. Python excels in scenarios where \
             performance of numerical computation and data manipulation is the primary concern.",
        ),
        code_sample: None,
    },
    ReportSection {
        id: "architecture-standards",
        title: "5. Architecture and Engineering Standards in 2025",
        excerpt: "As Rails applications scale beyond the MVP stage, the default MVC pattern often \
                  proves insufficient. In 2025, mature engineering teams adopt specific \
                  architectural standards to maintain velocity in large codebases.",
        full_content: Some(
            "As Rails applications scale beyond the MVP stage, the default MVC pattern \
             (Model-View-Controller) often proves insufficient. The simplicity that makes Rails \
             so powerful for new projects can become a liability as complexity grows. In 2025, \
             mature engineering teams adopt specific architectural standards to maintain \
             velocity, reduce bugs, and improve developer onboarding in large codebases.",
        ),
        code_sample: None,
    },
    ReportSection {
        id: "service-objects",
        title: "5.1 Service Objects (The Callable Pattern)",
        excerpt: "The \"Fat Model, Skinny Controller\" mantra has been superseded by the Service \
                  Object pattern. This standard encapsulates business logic into single-purpose \
                  classes, preventing \"God Objects\" and keeping controllers focused on HTTP \
                  handling.",
        full_content: Some(
            "The \"Fat Model, Skinny Controller\" mantra of the 2010s has been superseded by the \
             Service Object (or Interactor) pattern. This standard encapsulates business logic \
             into single-purpose, plain Ruby objects (POROs). This prevents models from becoming \
             bloated \"God Objects\" and keeps controllers focused solely on their core \
             responsibility: handling HTTP requests and responses.\n\n\
             Standard: The most common implementation in 2025 uses a Callable module to provide \
             a uniform API (.call) and return a Result object (Success/Failure) rather than \
             raising exceptions. This approach, often using monads, makes service outcomes \
             explicit and easy to handle.\n\n\
             Context: This pattern decouples the business logic from the web framework. The \
             CreateSubscription service can be called from a Controller, a Background Job, or \
             the Console with identical behavior, greatly improving testability and reusability.",
        ),
        code_sample: Some(
            r#"# app/services/subscriptions/create_subscription.rb
module Subscriptions
  class CreateSubscription
    # Standard interface for all services
    def self.call(**args)
      new(**args).call
    end
    def initialize(user:, plan_id:, payment_method:)
      @user = user
      @plan_id = plan_id
      @payment_method = payment_method
    end
    def call
      return OpenStruct.new(success?: false, error: "Invalid Plan") unless valid_plan?
      ActiveRecord::Base.transaction do
        subscription = @user.subscriptions.create!(plan_id: @plan_id)
        charge_result = PaymentGateway.charge(@payment_method, plan_price)
        unless charge_result.success?
          raise ActiveRecord::Rollback, charge_result.error
        end
        SubscriptionMailer.welcome(@user).deliver_later
        OpenStruct.new(success?: true, data: subscription)
      end
    rescue StandardError => e
      OpenStruct.new(success?: false, error: e.message)
    end
    private
    def valid_plan?
      Plan.exists?(@plan_id)
    end
    def plan_price
      Plan.find(@plan_id).price
    end
  end
end"#,
        ),
    },
    ReportSection {
        id: "hexagonal-architecture",
        title: "5.2 Hexagonal Architecture (Ports and Adapters)",
        excerpt: "For enterprise-grade Rails applications, Hexagonal Architecture is increasingly \
                  adopted to isolate the core domain from external inputs and outputs, \
                  drastically improving test speed and maintainability.",
        full_content: Some(
            "For enterprise-grade Rails applications (e.g., at Shopify or fintech startups), \
             Hexagonal Architecture is increasingly adopted to isolate the core domain from \
             external inputs and outputs. This allows the application to be tested without \
             loading the entire Rails framework, drastically improving test speed.\n\n\
             Implementation Detail: The \"Core\" does not depend on Rails. The infrastructure \
             layer depends on Rails and the Core. This inversion of control ensures that a \
             change in a database library or an external API does not require refactoring the \
             business rules.",
        ),
        code_sample: Some(
            "# Folder Structure Example for Hexagonal Rails
app/
├── controllers/      # Adapter: Driving (HTTP)
├── jobs/             # Adapter: Driving (Async)
├── core/             # The Hexagon (Pure Domain Logic)
│   ├── billing/      # Context
│   │   ├── domain/   # Entities (Pure Ruby Objects)
│   │   ├── use_cases/ # Interactors (Application Logic)
│   │   └── ports/    # Interfaces (Repositories/Gateways)
└── infrastructure/   # Adapter: Driven
    ├── repositories/ # ActiveRecord implementations of Ports
    ├── gateways/     # Stripe/PayPal API wrappers
    └── mailers/      # ActionMailer implementations",
        ),
    },
    ReportSection {
        id: "linting",
        title: "5.3 Linting: RuboCop Omakase vs. StandardRB",
        excerpt: "Code style consistency is strictly enforced in 2025. The community is split \
                  between two dominant configurations: RuboCop Omakase (Rails default) and \
                  StandardRB (strict, zero-configuration).",
        full_content: Some(
            "Code style consistency is strictly enforced in 2025 pipelines. The community is \
             split between two dominant configurations:\n\n\
             - RuboCop Omakase: The default configuration shipped with Rails 8. It represents \
             DHH's preferred style (double quotes, relaxed whitespace). It is designed to be \
             \"good enough\" for most, reducing the need for configuration.\n\
             - StandardRB: A strict, zero-configuration wrapper around RuboCop. Adopted by \
             consultancies and teams that want to eliminate \"bikeshedding\" (debates over \
             style). If you use StandardRB, you accept its rules; there is no configuration file \
             to tweak. This is becoming the preferred choice for teams prioritizing stability \
             and conformity.",
        ),
        code_sample: Some(
            r#"# Gemfile Integration
group :development, :test do
  # Choose one:
  gem "rubocop-rails-omakase", require: false # The Rails Way
  # OR
  gem "standard", require: false              # The Strict Way
end"#,
        ),
    },
    ReportSection {
        id: "testing",
        title: "5.4 Testing: RSpec vs. Minitest",
        excerpt: "The testing framework debate remains active. Minitest is the fast, simple Rails \
                  default, while RSpec is the expressive, BDD-focused industry standard for \
                  employment.",
        full_content: Some(
            "The testing framework debate remains active, reflecting the diversity of the \
             ecosystem.\n\n\
             - Minitest: The Rails default. Used by 37signals and Shopify. It is fast, uses \
             standard Ruby syntax (class UserTest < ActiveSupport::TestCase), and requires zero \
             setup. It is preferred for the \"One Person Framework\" approach where speed is \
             paramount.\n\
             - RSpec: The industry standard for employment. Used by the majority of \
             consultancies and large enterprises. Its BDD syntax (describe, it, expect) reads \
             like documentation and provides powerful mocking capabilities (RSpec Mocks). While \
             slower to boot, its expressiveness helps communicate business requirements.\n\n\
             Insight: Startups often begin with Minitest for velocity but migrate to RSpec as \
             the team grows and the need for detailed behavioral specifications increases.",
        ),
        code_sample: None,
    },
    ReportSection {
        id: "case-studies",
        title: "6. Engineering Products with Ruby: Case Studies",
        excerpt: "The viability of Ruby on Rails in 2025 is best evidenced by the scale and \
                  complexity of the products built upon it. Companies like Shopify, GitHub, and \
                  37signals demonstrate that Rails is for massive scale, not just MVPs.",
        full_content: Some(
            "The viability of Ruby on Rails in 2025 is best evidenced by the scale and \
             complexity of the products built upon it. These companies demonstrate that Rails is \
             not just for MVPs but for massive scale.\n\n\
             6.1 Shopify: The Modular Monolith\n\n\
             Shopify is the largest Rails codebase in the world. Their engineering strategy \
             rejects microservices in favor of a Modular Monolith. They use a tool called \
             packwerk to enforce strict boundaries between domains (e.g., Inventory, Billing, \
             Shipping) within the single repo. Shopify handles Black Friday/Cyber Monday traffic \
             (millions of requests per minute) on Rails and is the primary driver behind YJIT, \
             which has improved Ruby's performance by over 40%.\n\n\
             6.2 GitHub: Continuous Modernization\n\n\
             GitHub runs on a monolithic Rails application that is continuously upgraded, often \
             running off the main development branch. This strategy prevents technical debt and \
             ensures they leverage the latest performance improvements immediately. They map \
             every line of code to a \"Service Owner\" team to manage accountability.\n\n\
             6.3 37signals (Basecamp & HEY): The Deployment Pioneers\n\n\
             As the birthplace of Rails, 37signals continues to innovate. They migrated HEY and \
             Basecamp off AWS to bare-metal servers using Kamal, saving millions. They utilize \
             the pure \"Solid\" stack (SQLite/MySQL for everything, including jobs and caching), \
             proving high-performance applications can be built without the complexity of \
             Kubernetes.",
        ),
        code_sample: None,
    },
    ReportSection {
        id: "recommendations",
        title: "7. Strategic Recommendations",
        excerpt: "Embrace the monolith, adopt the \"Solid\" stack, deploy with Kamal, use Hotwire \
                  pragmatically, and standardize style with StandardRB. These are the key \
                  recommendations for engineering leaders in 2025.",
        full_content: Some(
            "Based on the research and current trends, the following recommendations are made \
             for engineering leaders in 2025:\n\n\
             1. Embrace the Monolith: Do not prematurely split applications into microservices. \
             Use Service Objects and Packwerk to modularize the codebase while keeping \
             deployment simple.\n\
             2. Adopt the \"Solid\" Stack: For new Rails 8 applications, utilize Solid Queue and \
             Solid Cache backed by the database. Avoid introducing Redis until scale explicitly \
             demands it.\n\
             3. Deploy with Kamal: Evaluate the cost savings of deploying to VPS/Bare Metal \
             using Kamal versus managed PaaS solutions.\n\
             4. Frontend Pragmatism: Default to Hotwire for 90% of the UI. Reserve React (via \
             Vite) only for high-fidelity components that require complex local state \
             management.\n\
             5. Standardize Style: Adopt StandardRB to eliminate friction in code reviews and \
             enforce consistent engineering practices.\n\n\
             In conclusion, Ruby on Rails in 2025 offers a unique value proposition: it is the \
             only major framework that provides a cohesive, integrated answer to every layer of \
             the stack. Its renaissance as a comprehensive ecosystem makes it arguably the most \
             efficient tool for building software businesses.",
        ),
        code_sample: None,
    },
];
