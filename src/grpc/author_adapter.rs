//! `author.v1.AuthorService` implementation.
//!
//! Calls come from other services on the internal network and are not
//! Bearer-authenticated. Failures travel as typed [`Status`] values; a
//! successful response always carries `message = "success"`.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::application::services::AuthorService;
use crate::proto::author::v1::{
    AuthorData, AuthorRequest, AuthorResponse, author_service_server,
};
use crate::utils::id::parse_author_id;

const SUCCESS_MESSAGE: &str = "success";

pub struct AuthorAdapter {
    author_service: Arc<AuthorService>,
}

impl AuthorAdapter {
    pub fn new(author_service: Arc<AuthorService>) -> Self {
        Self { author_service }
    }

    /// Wraps the adapter in the generated tonic server.
    pub fn into_server(self) -> author_service_server::AuthorServiceServer<Self> {
        author_service_server::AuthorServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl author_service_server::AuthorService for AuthorAdapter {
    #[tracing::instrument(skip(self))]
    async fn get_detail_author(
        &self,
        request: Request<AuthorRequest>,
    ) -> Result<Response<AuthorResponse>, Status> {
        let id = parse_author_id(&request.into_inner().id)?;

        let author = self.author_service.get_detail_author(id).await?;

        Ok(Response::new(AuthorResponse {
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(AuthorData {
                id: author.id.to_string(),
                name: author.name,
            }),
        }))
    }
}
