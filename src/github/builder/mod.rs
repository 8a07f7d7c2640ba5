pub mod create_pull_request_builder;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> anyhow::Result<Self::Output>;
}
