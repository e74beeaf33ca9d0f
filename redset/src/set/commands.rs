use crate::command::{Arity, CmdMap, Command, handler};
use crate::set::operations::SetOperations;

fn refs(args: &[Vec<u8>]) -> Vec<&[u8]> {
    args.iter().map(|v| v.as_slice()).collect()
}

/// Set and keyspace commands. `SPOP` and `SRANDMEMBER` take no COUNT.
pub fn commands() -> CmdMap {
    use Arity::*;

    CmdMap::from([
        ("SADD", Command::new(AtLeast(2), handler!(|gw, args| gw.sadd(&args[0], &refs(&args[1..]))))),
        ("SREM", Command::new(AtLeast(2), handler!(|gw, args| gw.srem(&args[0], &refs(&args[1..]))))),
        ("SMEMBERS", Command::new(Exactly(1), handler!(|gw, args| gw.smembers(&args[0])))),
        ("SISMEMBER", Command::new(Exactly(2), handler!(|gw, args| gw.sismember(&args[0], &args[1])))),
        ("SCARD", Command::new(Exactly(1), handler!(|gw, args| gw.scard(&args[0])))),
        ("DEL", Command::new(AtLeast(1), handler!(|gw, args| gw.del(&refs(&args))))),
        ("EXISTS", Command::new(AtLeast(1), handler!(|gw, args| gw.exists(&refs(&args))))),
        ("SUNION", Command::new(AtLeast(1), handler!(|gw, args| gw.sunion(&refs(&args))))),
        ("SINTER", Command::new(AtLeast(1), handler!(|gw, args| gw.sinter(&refs(&args))))),
        ("SDIFF", Command::new(AtLeast(1), handler!(|gw, args| gw.sdiff(&refs(&args))))),
        (
            "SUNIONSTORE",
            Command::new(AtLeast(2), handler!(|gw, args| gw.sunionstore(&args[0], &refs(&args[1..])))),
        ),
        (
            "SINTERSTORE",
            Command::new(AtLeast(2), handler!(|gw, args| gw.sinterstore(&args[0], &refs(&args[1..])))),
        ),
        (
            "SDIFFSTORE",
            Command::new(AtLeast(2), handler!(|gw, args| gw.sdiffstore(&args[0], &refs(&args[1..])))),
        ),
        ("SPOP", Command::new(Exactly(1), handler!(|gw, args| gw.spop(&args[0])))),
        ("SRANDMEMBER", Command::new(Exactly(1), handler!(|gw, args| gw.srandmember(&args[0])))),
        (
            "SMOVE",
            Command::new(Exactly(3), handler!(|gw, args| gw.smove(&args[0], &args[1], &args[2]))),
        ),
    ])
}
