use revrec_agent::functions::default_registry;
use revrec_agent::prompt::{parse_few_shots, unregistered_functions, FEW_SHOTS};
use revrec_agent::AgentRuntime;
use revrec_core::config::{AppConfig, LoadOptions};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = vec![check_few_shot_coverage()];

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_backend_connectivity(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "backend_connectivity",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_few_shot_coverage() -> DoctorCheck {
    let result = default_registry().and_then(|registry| {
        let shots = parse_few_shots(FEW_SHOTS)?;
        Ok((shots.len(), unregistered_functions(&shots, &registry)))
    });

    match result {
        Ok((count, missing)) if missing.is_empty() => DoctorCheck {
            name: "few_shot_functions",
            status: CheckStatus::Pass,
            details: format!("{count} few-shot dialogues reference only registered functions"),
        },
        Ok((_, missing)) => DoctorCheck {
            name: "few_shot_functions",
            status: CheckStatus::Fail,
            details: format!("few-shots call unregistered functions: {}", missing.join(", ")),
        },
        Err(error) => DoctorCheck {
            name: "few_shot_functions",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_backend_connectivity(config: &AppConfig) -> DoctorCheck {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return DoctorCheck {
                name: "backend_connectivity",
                status: CheckStatus::Fail,
                details: format!("failed to initialize async runtime: {error}"),
            };
        }
    };

    let result = runtime.block_on(async {
        let agent = AgentRuntime::from_config(&config.backend)
            .map_err(|error| format!("failed to build backend client: {error}"))?;
        agent
            .probe_backend()
            .await
            .map_err(|error| format!("backend did not answer: {error}"))
    });

    match result {
        Ok(()) => DoctorCheck {
            name: "backend_connectivity",
            status: CheckStatus::Pass,
            details: format!("backend answered at `{}`", config.backend.base_url),
        },
        Err(error) => {
            DoctorCheck { name: "backend_connectivity", status: CheckStatus::Fail, details: error }
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
