use setdb::SetDB;

/// Server-side view of the store: the command handlers translate RESP
/// requests into calls on this gateway.
#[derive(Clone)]
pub struct SetGateway {
    pub(crate) db: SetDB,
}

impl SetGateway {
    pub fn new(db: SetDB) -> Self {
        Self { db }
    }
}
