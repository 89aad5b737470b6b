mod metrics_pipeline;
