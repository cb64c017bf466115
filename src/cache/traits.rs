use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 键存在但取值失败（例如后端连接异常）
    ExistsButNoValue,
    /// 未命中
    NotFound,
}

/// 对象缓存统一接口，值以 JSON 字符串形式存取
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// ttl 以秒计，0 表示使用后端的默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}
