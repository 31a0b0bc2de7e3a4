mod upload_builder;

pub use upload_builder::UploadBuilder;

use crate::Result;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}
