//! Verb vocabularies
//!
//! The closed command vocabulary of the proxied backend, split by
//! routing category. Extending support to a new command is a data
//! change here, not a logic change: add the upper-case verb to the
//! correct list. The three routable lists and the blocked list must
//! stay pairwise disjoint.

/// Length in bytes of the longest verb in any vocabulary
/// (`ZREVRANGEBYSCORE`). Anything longer cannot match.
pub(crate) const MAX_VERB_LEN: usize = 16;

/// Verbs handled locally by the proxy without touching a backend.
pub const CONTROL_COMMANDS: &[&str] = &["PING"];

/// Verbs that never mutate keyspace state; safe for any replica.
pub const READ_COMMANDS: &[&str] = &[
    // Keyspace
    "DUMP", "EXISTS", "PTTL", "TTL", "TYPE",
    // Strings / bitmaps
    "BITCOUNT", "BITPOS", "GET", "GETBIT", "GETRANGE", "MGET", "STRLEN",
    // Hashes
    "HEXISTS", "HGET", "HGETALL", "HKEYS", "HLEN", "HMGET", "HSTRLEN", "HVALS", "HSCAN",
    // Sets
    "SCARD", "SDIFF", "SINTER", "SISMEMBER", "SMEMBERS", "SRANDMEMBER", "SUNION", "SSCAN",
    // Sorted sets
    "ZCARD", "ZCOUNT", "ZLEXCOUNT", "ZRANGE", "ZRANGEBYLEX", "ZRANGEBYSCORE", "ZRANK",
    "ZREVRANGE", "ZREVRANGEBYLEX", "ZREVRANGEBYSCORE", "ZREVRANK", "ZSCORE", "ZSCAN",
    // Lists
    "LINDEX", "LLEN", "LRANGE",
    // HyperLogLog
    "PFCOUNT",
];

/// Verbs that can mutate keyspace state; primary only.
pub const WRITE_COMMANDS: &[&str] = &[
    // Keyspace
    "DEL", "EXPIRE", "EXPIREAT", "PERSIST", "PEXPIRE", "PEXPIREAT", "RESTORE", "SORT",
    // Strings / bitmaps
    "APPEND", "DECR", "DECRBY", "GETSET", "INCR", "INCRBY", "INCRBYFLOAT", "MSET",
    "PSETEX", "SET", "SETBIT", "SETEX", "SETNX", "SETRANGE",
    // Hashes
    "HDEL", "HINCRBY", "HINCRBYFLOAT", "HMSET", "HSET", "HSETNX",
    // Lists
    "LINSERT", "LPOP", "LPUSH", "LPUSHX", "LREM", "LSET", "LTRIM", "RPOP", "RPOPLPUSH",
    "RPUSH", "RPUSHX",
    // Sets
    "SADD", "SDIFFSTORE", "SINTERSTORE", "SMOVE", "SPOP", "SREM", "SUNIONSTORE",
    // Sorted sets
    "ZADD", "ZINCRBY", "ZINTERSTORE", "ZREM", "ZREMRANGEBYLEX", "ZREMRANGEBYRANK",
    "ZREMRANGEBYSCORE", "ZUNIONSTORE",
    // HyperLogLog
    "PFADD", "PFMERGE",
];

/// Verbs the proxy knows and deliberately refuses to forward.
///
/// Multi-key commands break under sharding, blocking commands pin a
/// backend connection, scripting and admin commands bypass routing
/// invariants, and topology commands only make sense against a single
/// node. Unknown verbs fall through to the same category; this list
/// records the refusals that are intentional.
pub const BLOCKED_COMMANDS: &[&str] = &[
    // Multi-key / cross-slot
    "MSETNX", "BITOP", "RENAME", "RENAMENX",
    // Blocking
    "BLPOP", "BRPOP", "BRPOPLPUSH", "WAIT",
    // Keyspace-wide scans
    "KEYS", "SCAN", "RANDOMKEY",
    // Scripting
    "EVAL", "EVALSHA",
    // Topology / migration
    "MIGRATE", "MOVE", "SELECT",
    // Administrative / introspection
    "OBJECT", "AUTH", "ECHO", "INFO", "PROXY", "SLOWLOG", "QUIT", "TIME", "CONFIG",
    "COMMANDS",
];
