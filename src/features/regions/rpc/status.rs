use tonic::Status;

use crate::core::error::AppError;

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::DataNotFound => Status::not_found(err.public_message()),
            AppError::Repository => Status::internal(err.public_message()),
        }
    }
}
