//! 对象缓存抽象层
//!
//! 通过插件注册表解耦缓存后端，启动时按配置选择 moka 或 redis。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明一个对象缓存插件，进程启动时自动注册到插件表
///
/// 类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        <$plugin>::new()
                            .map(|cache| {
                                Box::new(cache) as Box<dyn $crate::cache::ObjectCache>
                            })
                            .map_err($crate::errors::CampusError::cache_connection)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
