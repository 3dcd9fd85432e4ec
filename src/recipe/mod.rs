//! The built-in scaffold recipe: Rails 4 on Heroku.
//!
//! One ordered step list covering the whole run, from the Unicorn Procfile
//! through the initial git commit. Template payloads live under
//! `resources/templates/` and are compiled in.

use crate::step::{DependencyGroup, Guard, Step};
use crate::template::Template;

/// Remote host for the binary assets (favicons, touch icons, og-image).
pub const DEFAULT_ASSETS_URL: &str =
    "https://github.com/61bits/rails-templates/raw/master/assets";

// =============================================================================
// Markers for injection into files the Rails generator produced
// =============================================================================

const GEMFILE_SOURCE: &str = "source 'https://rubygems.org'";
const APPLICATION_CLASS: &str = "class Application < Rails::Application";
const ENV_CONFIGURE: &str = ".configure do";
const ROUTES_DRAW: &str = ".routes.draw do";

// =============================================================================
// Injected snippets (short enough to keep inline)
// =============================================================================

const DEV_LOGGING: &str = "
  config.logger = Logger.new(STDOUT)
  config.logger.level = Logger.const_get(ENV['LOG_LEVEL'] ? ENV['LOG_LEVEL'].upcase : 'DEBUG')
";

const APP_CONFIG: &str = "
    config.filter_parameters += [:password, :password_confirmation]
    config.i18n.load_path += Dir[Rails.root.join('config', 'locales', '**/*.{rb,yml}').to_s]
";

const LOCALE_BR: &str = "
    config.i18n.default_locale = 'pt-BR'
    config.time_zone = 'Brasilia'
";

const PRY_CONSOLE: &str = "
    console do
      require 'pry'
      config.console = Pry
    end
";

const SLIM_DEV: &str =
    "  Slim::Engine.set_default_options pretty: true, sort_attrs: false, format: :html5\n";

const SLIM_PROD: &str = "  Slim::Engine.set_default_options format: :html5\n";

const RUBY_PIN: &str = "ruby '2.0.0'\n";

// =============================================================================
// Template payloads
// =============================================================================

const PROCFILE: Template = Template::plain(include_str!("../../resources/templates/procfile"));
const DOTENV: Template = Template::plain(include_str!("../../resources/templates/dotenv"));
const UNICORN_RB: Template = Template::plain(include_str!("../../resources/templates/unicorn.rb"));

const SASS_BASE_ALL: Template =
    Template::plain(include_str!("../../resources/templates/sass/base_all.sass"));
const SASS_BASE_VARIABLES: Template =
    Template::plain(include_str!("../../resources/templates/sass/base_variables.sass"));
const SASS_BASE_FONTS: Template =
    Template::plain(include_str!("../../resources/templates/sass/base_fonts.sass"));
const SASS_BASE_MIXINS: Template =
    Template::plain(include_str!("../../resources/templates/sass/base_mixins.sass"));
const SASS_BASE_LT_IE9: Template =
    Template::plain(include_str!("../../resources/templates/sass/base_lt_ie9.sass"));
const SASS_LAYOUTS_ALL: Template =
    Template::plain(include_str!("../../resources/templates/sass/layouts_all.sass"));
const SASS_MODULES_ALL: Template =
    Template::plain(include_str!("../../resources/templates/sass/modules_all.sass"));
const SASS_STATES_ALL: Template =
    Template::plain(include_str!("../../resources/templates/sass/states_all.sass"));
const SASS_THEMES_ALL: Template =
    Template::plain(include_str!("../../resources/templates/sass/themes_all.sass"));
const SASS_APPLICATION: Template =
    Template::plain(include_str!("../../resources/templates/sass/application.sass"));

const CROSSDOMAIN_XML: Template =
    Template::plain(include_str!("../../resources/templates/public/crossdomain.xml"));
const ROBOTS_TXT: Template =
    Template::plain(include_str!("../../resources/templates/public/robots.txt"));
const HUMANS_TXT: Template = Template::new(
    include_str!("../../resources/templates/public/humans.txt"),
    &["team_banner", "team_name", "team_url"],
);

const LAYOUT_APPLICATION: Template = Template::plain(include_str!(
    "../../resources/templates/slim/application_layout.slim"
));
const LAYOUT_METATAGS: Template = Template::new(
    include_str!("../../resources/templates/slim/metatags.slim"),
    &["team_name", "team_url"],
);
const LAYOUT_FAVICONS: Template =
    Template::plain(include_str!("../../resources/templates/slim/favicons.slim"));
const LAYOUT_BROWSER_WARNING: Template = Template::plain(include_str!(
    "../../resources/templates/slim/browser_warning.slim"
));
const PAGES_INDEX: Template =
    Template::plain(include_str!("../../resources/templates/slim/pages_index.slim"));
const FRONTEND_INDEX: Template = Template::plain(include_str!(
    "../../resources/templates/slim/frontend_index.slim"
));

const PAGES_CONTROLLER: Template =
    Template::plain(include_str!("../../resources/templates/ruby/pages_controller.rb"));
const FRONTEND_CONTROLLER: Template = Template::plain(include_str!(
    "../../resources/templates/ruby/frontend_controller.rb"
));

const LICENSE_FREE: Template = Template::new(
    include_str!("../../resources/templates/license/free_software.txt"),
    &["team_name"],
);
const LICENSE_COMMERCIAL: Template = Template::new(
    include_str!("../../resources/templates/license/commercial.txt"),
    &["license_date", "license_licensee", "team_name", "software_name"],
);

const DATABASE_YML: Template = Template::new(
    include_str!("../../resources/templates/database.yml"),
    &["db_prefix", "db_username", "db_password"],
);
const GITIGNORE: Template =
    Template::plain(include_str!("../../resources/templates/gitignore"));
const RUBY_VERSION: Template =
    Template::plain(include_str!("../../resources/templates/ruby-version"));

const FAVICON_ASSETS: &[&str] = &[
    "favicon.png",
    "favicon.ico",
    "apple-touch-icon-144x144-precomposed.png",
    "apple-touch-icon-114x114-precomposed.png",
    "apple-touch-icon-72x72-precomposed.png",
    "apple-touch-icon-57x57-precomposed.png",
    "apple-touch-icon-precomposed.png",
    "apple-touch-icon.png",
    "og-image.png",
];

fn gem(name: &'static str) -> Step {
    Step::AddDependency {
        name,
        version: None,
        group: None,
    }
}

/// The full ordered step list. Later steps depend on files created by
/// earlier ones; the order is part of the contract.
pub fn steps() -> Vec<Step> {
    let mut steps = Vec::new();

    // =========================================================================
    // Unicorn + Foreman
    // =========================================================================

    steps.push(gem("unicorn"));
    steps.push(Step::AddDependency {
        name: "foreman",
        version: None,
        group: Some(DependencyGroup::Development),
    });
    steps.push(Step::WriteFile {
        path: "Procfile",
        template: PROCFILE,
    });
    steps.push(Step::WriteFile {
        path: ".env",
        template: DOTENV,
    });
    steps.push(Step::WriteFile {
        path: "config/unicorn.rb",
        template: UNICORN_RB,
    });
    steps.push(Step::InjectIntoFile {
        path: "config/environments/development.rb",
        after: ENV_CONFIGURE,
        content: DEV_LOGGING,
    });

    // =========================================================================
    // Application config
    // =========================================================================

    steps.push(Step::InjectIntoFile {
        path: "config/application.rb",
        after: APPLICATION_CLASS,
        content: APP_CONFIG,
    });
    steps.push(Step::AskYesNo {
        key: "locale_br",
        prompt: "Change locale to pt-BR and time zone to Brazil's official time",
    });
    steps.push(Step::Conditional {
        guard: Guard::Yes("locale_br"),
        steps: vec![Step::InjectIntoFile {
            path: "config/application.rb",
            after: APPLICATION_CLASS,
            content: LOCALE_BR,
        }],
    });

    // =========================================================================
    // Pry
    // =========================================================================

    steps.push(gem("pry"));
    steps.push(gem("pry-doc"));
    steps.push(Step::InjectIntoFile {
        path: "config/application.rb",
        after: APPLICATION_CLASS,
        content: PRY_CONSOLE,
    });

    // =========================================================================
    // Heroku
    // =========================================================================

    steps.push(Step::AddDependency {
        name: "rails_12factor",
        version: None,
        group: Some(DependencyGroup::Production),
    });

    // =========================================================================
    // Compass
    // =========================================================================

    steps.push(Step::AddDependency {
        name: "compass-rails",
        version: Some("~> 2.0.alpha.0"),
        group: None,
    });
    steps.push(gem("compass-normalize"));
    steps.push(gem("singularitygs"));
    steps.push(gem("singularity-extras"));
    steps.push(gem("breakpoint"));
    steps.push(gem("color-schemer"));
    steps.push(gem("toolkit"));
    steps.push(gem("oily_png"));

    // =========================================================================
    // SMACSS stylesheet tree
    // =========================================================================

    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/base/_all.sass",
        template: SASS_BASE_ALL,
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/base/_variables.sass",
        template: SASS_BASE_VARIABLES,
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/base/_fonts.sass",
        template: SASS_BASE_FONTS,
    });
    steps.push(Step::WriteFile {
        path: "vendor/assets/fonts/.gitkeep",
        template: Template::plain(""),
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/base/_mixins.sass",
        template: SASS_BASE_MIXINS,
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/base/_lt_ie9.sass",
        template: SASS_BASE_LT_IE9,
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/layouts/_all.sass",
        template: SASS_LAYOUTS_ALL,
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/modules/_all.sass",
        template: SASS_MODULES_ALL,
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/states/_all.sass",
        template: SASS_STATES_ALL,
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/themes/_all.sass",
        template: SASS_THEMES_ALL,
    });
    steps.push(Step::DeleteFile {
        path: "app/assets/stylesheets/application.css",
    });
    steps.push(Step::WriteFile {
        path: "app/assets/stylesheets/application.sass",
        template: SASS_APPLICATION,
    });

    // =========================================================================
    // Slim
    // =========================================================================

    steps.push(gem("slim"));
    steps.push(Step::InjectIntoFile {
        path: "config/environments/development.rb",
        after: ENV_CONFIGURE,
        content: SLIM_DEV,
    });
    steps.push(Step::InjectIntoFile {
        path: "config/environments/production.rb",
        after: ENV_CONFIGURE,
        content: SLIM_PROD,
    });

    // =========================================================================
    // crossdomain.xml, robots.txt and humans.txt
    // =========================================================================

    steps.push(Step::WriteFile {
        path: "public/crossdomain.xml",
        template: CROSSDOMAIN_XML,
    });
    steps.push(Step::WriteFile {
        path: "public/robots.txt",
        template: ROBOTS_TXT,
    });
    steps.push(Step::AskQuestion {
        key: "team_name",
        prompt: "Team name",
    });
    steps.push(Step::AskQuestion {
        key: "team_url",
        prompt: "Team full url",
    });
    steps.push(Step::CaptureCommand {
        key: "team_banner",
        program: "figlet",
        args: &["-f", "larry3d"],
        input_key: "team_name",
    });
    steps.push(Step::WriteFile {
        path: "public/humans.txt",
        template: HUMANS_TXT,
    });

    // =========================================================================
    // Pages controller, frontend controller, HTML5Boilerplate layout
    // =========================================================================

    steps.push(Step::DeleteFile {
        path: "app/views/layouts/application.html.erb",
    });
    steps.push(Step::WriteFile {
        path: "app/views/layouts/application.slim",
        template: LAYOUT_APPLICATION,
    });
    steps.push(Step::WriteFile {
        path: "app/views/layouts/_metatags.slim",
        template: LAYOUT_METATAGS,
    });
    steps.push(Step::WriteFile {
        path: "app/views/layouts/_favicons.slim",
        template: LAYOUT_FAVICONS,
    });
    for &file_name in FAVICON_ASSETS {
        steps.push(Step::DownloadAsset {
            file_name,
            dest_dir: "public",
        });
    }
    steps.push(Step::WriteFile {
        path: "app/views/layouts/_browser_warning.slim",
        template: LAYOUT_BROWSER_WARNING,
    });
    steps.push(Step::WriteFile {
        path: "app/views/pages/index.slim",
        template: PAGES_INDEX,
    });
    steps.push(Step::WriteFile {
        path: "app/controllers/pages_controller.rb",
        template: PAGES_CONTROLLER,
    });
    steps.push(Step::InjectIntoFile {
        path: "config/routes.rb",
        after: ROUTES_DRAW,
        content: "  root to: 'pages#index'\n",
    });
    steps.push(Step::InjectIntoFile {
        path: "config/routes.rb",
        after: ROUTES_DRAW,
        content: "  get ':slug' => 'pages#show', as: :page\n",
    });
    steps.push(Step::WriteFile {
        path: "app/controllers/frontend_controller.rb",
        template: FRONTEND_CONTROLLER,
    });
    steps.push(Step::WriteFile {
        path: "app/views/frontend/index.slim",
        template: FRONTEND_INDEX,
    });
    steps.push(Step::InjectIntoFile {
        path: "config/routes.rb",
        after: ROUTES_DRAW,
        content: "  get 'frontend/:template' => 'frontend#show'\n",
    });
    steps.push(Step::InjectIntoFile {
        path: "config/routes.rb",
        after: ROUTES_DRAW,
        content: "  get 'frontend'           => 'frontend#index'\n",
    });

    // =========================================================================
    // Formtastic
    // =========================================================================

    steps.push(Step::AskYesNo {
        key: "formtastic",
        prompt: "Install formtastic",
    });
    steps.push(Step::Conditional {
        guard: Guard::Yes("formtastic"),
        steps: vec![
            gem("formtastic"),
            Step::RunShell {
                program: "rails",
                args: &["generate", "formtastic:install"],
            },
        ],
    });

    // =========================================================================
    // Ruby 2.0
    // =========================================================================

    steps.push(Step::InjectIntoFile {
        path: "Gemfile",
        after: GEMFILE_SOURCE,
        content: RUBY_PIN,
    });
    steps.push(Step::WriteFile {
        path: ".ruby-version",
        template: RUBY_VERSION,
    });

    // =========================================================================
    // License
    // =========================================================================

    steps.push(Step::AskYesNo {
        key: "free_software",
        prompt: "Is this free software",
    });
    steps.push(Step::Conditional {
        guard: Guard::Yes("free_software"),
        steps: vec![Step::WriteFile {
            path: "LICENSE",
            template: LICENSE_FREE,
        }],
    });
    steps.push(Step::Conditional {
        guard: Guard::No("free_software"),
        steps: vec![
            Step::AskQuestion {
                key: "license_date",
                prompt: "Software license date",
            },
            Step::AskQuestion {
                key: "license_licensee",
                prompt: "Software licensee",
            },
            Step::AskQuestion {
                key: "software_name",
                prompt: "Software name",
            },
            Step::WriteFile {
                path: "LICENSE",
                template: LICENSE_COMMERCIAL,
            },
        ],
    });

    // =========================================================================
    // Postgres
    // =========================================================================

    steps.push(gem("pg"));
    steps.push(Step::ReplaceInFile {
        path: "Gemfile",
        needle: "gem 'sqlite3'",
        replacement: "# gem 'sqlite3'",
    });
    steps.push(Step::CommentOutFile {
        path: "config/database.yml",
    });
    steps.push(Step::AskQuestion {
        key: "db_prefix",
        prompt: "What is your database prefix",
    });
    steps.push(Step::AskQuestion {
        key: "db_username",
        prompt: "What is your database username",
    });
    steps.push(Step::AskQuestion {
        key: "db_password",
        prompt: "What is your database password",
    });
    steps.push(Step::AppendFile {
        path: "config/database.yml",
        template: DATABASE_YML,
    });
    steps.push(Step::RunShell {
        program: "rake",
        args: &["db:create:all"],
    });
    steps.push(Step::RunShell {
        program: "rake",
        args: &["db:migrate"],
    });

    // =========================================================================
    // Git
    // =========================================================================

    steps.push(Step::AppendFile {
        path: ".gitignore",
        template: GITIGNORE,
    });
    steps.push(Step::GitCommit { message: "Genesis" });

    steps
}
