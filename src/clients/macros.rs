/// Generates the read/list/delete methods every resource client shares.
///
/// `$error` must implement `From<FrameworkError>` and have a `NotFound(String)` variant.
#[macro_export]
macro_rules! impl_client_methods {
    (
        $client_name:ident, $entity:ty, $error:ty,
        get = $get:ident, list = $list:ident, delete = $delete:ident
    ) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $get(&self, id: String) -> Result<$entity, $error> {
                tracing::debug!("Sending request");
                self.inner
                    .get(id.clone())
                    .await
                    .map_err(<$error>::from)?
                    .ok_or(<$error>::NotFound(id))
            }

            #[tracing::instrument(skip(self))]
            pub async fn $list(&self) -> Result<Vec<$entity>, $error> {
                tracing::debug!("Sending request");
                self.inner.list().await.map_err(<$error>::from)
            }

            #[tracing::instrument(skip(self))]
            pub async fn $delete(&self, id: String) -> Result<$entity, $error> {
                tracing::debug!("Sending request");
                self.inner.delete(id).await.map_err(<$error>::from)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $($methods:tt)*) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $error, $($methods)*);
    };
}
