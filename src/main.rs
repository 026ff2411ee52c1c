use tracing::error;
use tracing_subscriber::EnvFilter;

mod app;

mod domain {
    pub mod aggregate;
    pub mod drilldown;
    pub mod search;
    pub mod summary;

    pub mod entities {
        pub mod notification;
        pub mod record;
        pub mod submission;
    }
}

mod usecase {
    pub mod ports {
        pub mod export;
        pub mod gateway;
        pub mod presenter;
    }

    pub mod services {
        pub mod export_service;
        pub mod submission_service;
    }
}

mod infra {
    pub mod config;

    pub mod export {
        pub mod csv;
    }

    pub mod http {
        pub mod client;
    }
}

mod platform {
    pub mod desktop {
        pub mod dialogs;
    }
}

mod ui {
    pub mod components {
        pub mod companies;
        pub mod records;
        pub mod summary;
        pub mod toasts;
        pub mod upload;
    }

    pub mod state {
        pub mod app_state;
    }
}


fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notas_recon=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let mut config = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title("Conferência de Notas de Entrada"),
    );
    match infra::config::default_webview_data_dir() {
        Ok(dir) => config = config.with_data_directory(dir),
        Err(err) => error!("using default webview data dir: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
}
