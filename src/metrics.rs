use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{rt, web, Error};
use prometheus::{Encoder, Gauge, IntCounter, Registry, TextEncoder};
use sysinfo::{ProcessesToUpdate, System};

/// Process-level instrumentation exported on `/metrics`.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    requests: IntCounter,
    ram_usage: Gauge,
    cpu_usage: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounter::new("backend_api_requests_total", "API requests served")?;
        let ram_usage = Gauge::new(
            "backend_api_ram_usage_bytes",
            "RAM usage of the API service",
        )?;
        let cpu_usage = Gauge::new(
            "backend_api_cpu_usage_percent",
            "Current CPU usage percent of API Service",
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(ram_usage.clone()))?;
        registry.register(Box::new(cpu_usage.clone()))?;

        Ok(Metrics {
            registry,
            requests,
            ram_usage,
            cpu_usage,
        })
    }

    pub fn record_request(&self) {
        self.requests.inc();
    }

    /// Renders every registered metric in the Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Refreshes the CPU and memory gauges once.
    pub fn sample(&self, system: &mut System) {
        system.refresh_cpu_usage();
        self.cpu_usage.set(f64::from(system.global_cpu_usage()));

        if let Ok(pid) = sysinfo::get_current_pid() {
            system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
            if let Some(process) = system.process(pid) {
                self.ram_usage.set(process.memory() as f64);
            }
        }
    }

    /// Samples CPU and memory on a fixed interval for the lifetime of the process.
    pub fn spawn_sampler(&self, interval: Duration) {
        let metrics = self.clone();
        rt::spawn(async move {
            let mut system = System::new();
            let mut ticker = rt::time::interval(interval);
            loop {
                ticker.tick().await;
                metrics.sample(&mut system);
            }
        });
    }
}

/// Counts every request passing through the app.
pub async fn track_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if let Some(metrics) = req.app_data::<web::Data<Metrics>>() {
        metrics.record_request();
    }
    next.call(req).await
}
