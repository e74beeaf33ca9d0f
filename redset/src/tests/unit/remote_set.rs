use crate::codec::{Marshal, Raw, SetOptions};
use crate::error::SetError;
use crate::operand::SetOperand;
use crate::remote_set::RemoteSet;
use serde::{Deserialize, Serialize};
use setdb::SetDB;

fn s(v: &str) -> String {
    v.to_string()
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

fn raw_set(db: &SetDB, key: &str) -> RemoteSet<SetDB, Raw> {
    RemoteSet::new(key, db.clone(), SetOptions::raw())
}

async fn filled(db: &SetDB, key: &str, values: &[&str]) -> RemoteSet<SetDB, Raw> {
    let set = raw_set(db, key);
    let values = strings(values);
    set.merge(&values).await.unwrap();
    set
}

#[tokio::test]
async fn test_add_is_idempotent() {
    let db = SetDB::new();
    let a = raw_set(&db, "a");

    assert!(a.add(&s("x")).await.unwrap());
    assert_eq!(a.len().await.unwrap(), 1);

    assert!(!a.add(&s("x")).await.unwrap());
    assert_eq!(a.len().await.unwrap(), 1);
    assert_eq!(a.members().await.unwrap(), strings(&["x"]));
}

#[tokio::test]
async fn test_member_on_absent_key() {
    let db = SetDB::new();
    let a = raw_set(&db, "never-written");
    assert!(!a.is_member(&s("q")).await.unwrap());
    assert!(a.is_empty().await.unwrap());
    assert!(!a.exists().await.unwrap());
    assert!(a.members().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x", "y"]).await;

    assert!(a.delete(&s("x")).await.unwrap());
    assert!(!a.delete(&s("x")).await.unwrap());
    assert!(!a.delete(&s("absent")).await.unwrap());
    assert_eq!(a.members().await.unwrap(), strings(&["y"]));
}

#[tokio::test]
async fn test_clear_removes_collection_for_every_handle() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x", "y"]).await;
    let other = raw_set(&db, "a");

    a.clear().await.unwrap();
    assert!(!other.exists().await.unwrap());
    assert_eq!(other.len().await.unwrap(), 0);
    // clearing an absent key is fine
    a.clear().await.unwrap();
}

#[tokio::test]
async fn test_handles_never_cache() {
    let db = SetDB::new();
    let a = raw_set(&db, "shared");
    let b = raw_set(&db, "shared");

    a.add(&s("x")).await.unwrap();
    assert!(b.is_member(&s("x")).await.unwrap());

    // a writer that bypasses the handles entirely
    db.sadd(b"shared", &[b"y"]);
    assert_eq!(sorted(a.members().await.unwrap()), strings(&["x", "y"]));
    assert_eq!(b.len().await.unwrap(), 2);
}

#[tokio::test]
async fn test_algebra_scenario() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x", "y"]).await;
    let b = filled(&db, "b", &["y", "z"]).await;

    assert_eq!(a.intersection([&b]).await.unwrap(), strings(&["y"]));
    assert_eq!(sorted(a.union([&b]).await.unwrap()), strings(&["x", "y", "z"]));
    assert_eq!(a.difference([&b]).await.unwrap(), strings(&["x"]));
}

#[tokio::test]
async fn test_set_laws() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["1", "2", "3"]).await;
    let b = filled(&db, "b", &["3", "4"]).await;

    assert_eq!(
        sorted(a.union([&b]).await.unwrap()),
        sorted(b.union([&a]).await.unwrap())
    );
    assert_eq!(
        sorted(a.intersection([&a]).await.unwrap()),
        sorted(a.members().await.unwrap())
    );
    assert!(a.difference([&a]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_operands_mix_handles_and_names() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x", "y", "z"]).await;
    let b = filled(&db, "b", &["y"]).await;
    filled(&db, "c", &["z"]).await;

    let c_name = s("c");
    let diff = a
        .difference([SetOperand::from(&b), SetOperand::from(&c_name)])
        .await
        .unwrap();
    assert_eq!(diff, strings(&["x"]));

    let union = a.union(["b", "c", "missing"]).await.unwrap();
    assert_eq!(sorted(union), strings(&["x", "y", "z"]));

    // an absent operand makes an intersection empty
    assert!(a.intersection(["missing"]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_difference_subtracts_all_operands_at_once() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["1", "2", "3", "4"]).await;
    filled(&db, "b", &["1"]).await;
    filled(&db, "c", &["2", "5"]).await;

    let diff = sorted(a.difference(["b", "c"]).await.unwrap());
    assert_eq!(diff, strings(&["3", "4"]));

    // operand order only matters for which set is the minuend
    let b = raw_set(&db, "b");
    assert!(b.difference([&a]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_operands_rejected() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x"]).await;
    let none = || Vec::<&str>::new();

    assert!(matches!(a.intersection(none()).await, Err(SetError::InvalidArgument(_))));
    assert!(matches!(a.union(none()).await, Err(SetError::InvalidArgument(_))));
    assert!(matches!(a.difference(none()).await, Err(SetError::InvalidArgument(_))));
    assert!(matches!(a.interstore("dest", none()).await, Err(SetError::InvalidArgument(_))));
    assert!(matches!(a.unionstore("dest", none()).await, Err(SetError::InvalidArgument(_))));
    assert!(matches!(a.diffstore("dest", none()).await, Err(SetError::InvalidArgument(_))));
    assert!(!db.exists(b"dest"));
}

#[tokio::test]
async fn test_store_combine_counts_match_stored_members() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x", "y"]).await;
    let b = filled(&db, "b", &["y", "z"]).await;
    let tmp = raw_set(&db, "tmp");

    let n = a.unionstore("tmp", [&b]).await.unwrap();
    assert_eq!(n, 3);
    assert_eq!(n as usize, tmp.members().await.unwrap().len());

    let n = a.interstore("tmp", [&b]).await.unwrap();
    assert_eq!(n, 1);
    assert_eq!(tmp.members().await.unwrap(), strings(&["y"]));

    let n = a.diffstore("tmp", [&b]).await.unwrap();
    assert_eq!(n, 1);
    assert_eq!(tmp.members().await.unwrap(), strings(&["x"]));

    // sources are untouched
    assert_eq!(a.len().await.unwrap(), 2);
    assert_eq!(b.len().await.unwrap(), 2);
}

#[tokio::test]
async fn test_store_combine_never_decodes() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x"]).await;
    db.sadd(b"junk", &[&[0xff, 0xfe][..]]);

    // the read variant has to decode the foreign bytes and fails as a whole
    assert!(matches!(a.union(["junk"]).await, Err(SetError::Decode(_))));
    // the store variant only reports the size
    assert_eq!(a.unionstore("out", ["junk"]).await.unwrap(), 2);
}

#[tokio::test]
async fn test_decode_error_is_eager() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["ok"]).await;
    db.sadd(b"a", &[&[0xc3, 0x28][..]]);

    assert!(matches!(a.members().await, Err(SetError::Decode(_))));
    assert!(matches!(a.eq_members(&strings(&["ok"])).await, Err(SetError::Decode(_))));
}

#[tokio::test]
async fn test_eq_members() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x", "y"]).await;

    assert!(a.eq_members(&strings(&["y", "x"])).await.unwrap());
    assert!(a.eq_members(&strings(&["x", "y", "x"])).await.unwrap());
    assert!(!a.eq_members(&strings(&["x"])).await.unwrap());
    assert!(!a.eq_members(&strings(&["x", "y", "z"])).await.unwrap());

    let empty = raw_set(&db, "empty");
    assert!(empty.eq_members(&Vec::new()).await.unwrap());
}

#[tokio::test]
async fn test_merge() {
    let db = SetDB::new();
    let a = raw_set(&db, "a");

    assert_eq!(a.merge(&strings(&["x", "y", "x"])).await.unwrap(), 2);
    assert_eq!(a.merge(&strings(&["y", "z"])).await.unwrap(), 1);
    assert_eq!(a.merge(&Vec::new()).await.unwrap(), 0);
    assert_eq!(a.len().await.unwrap(), 3);
}

#[tokio::test]
async fn test_pop_and_random_member() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x", "y"]).await;

    let picked = a.random_member().await.unwrap().unwrap();
    assert!(picked == "x" || picked == "y");
    assert_eq!(a.len().await.unwrap(), 2);

    let first = a.pop().await.unwrap().unwrap();
    let second = a.pop().await.unwrap().unwrap();
    assert_eq!(sorted(vec![first, second]), strings(&["x", "y"]));
    assert_eq!(a.pop().await.unwrap(), None);
    assert_eq!(a.random_member().await.unwrap(), None);
}

#[tokio::test]
async fn test_move_to() {
    let db = SetDB::new();
    let a = filled(&db, "a", &["x", "y"]).await;
    let b = raw_set(&db, "b");

    assert!(a.move_to(&s("x"), &b).await.unwrap());
    assert!(!a.move_to(&s("x"), &b).await.unwrap());
    assert!(a.move_to(&s("y"), "c").await.unwrap());

    assert!(a.is_empty().await.unwrap());
    assert_eq!(b.members().await.unwrap(), strings(&["x"]));
    assert_eq!(raw_set(&db, "c").members().await.unwrap(), strings(&["y"]));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Job {
    id: u32,
    queue: String,
}

#[tokio::test]
async fn test_marshaled_values() {
    let db = SetDB::new();
    let jobs: RemoteSet<SetDB, Marshal<Job>> = RemoteSet::new("jobs", db.clone(), SetOptions::marshal());
    let done: RemoteSet<SetDB, Marshal<Job>> = RemoteSet::new("done", db.clone(), SetOptions::marshal());

    let j1 = Job { id: 1, queue: "fast".into() };
    let j2 = Job { id: 2, queue: "slow".into() };

    assert!(jobs.add(&j1).await.unwrap());
    assert!(jobs.add(&j2).await.unwrap());
    assert!(!jobs.add(&j1.clone()).await.unwrap());
    assert!(done.add(&j2).await.unwrap());

    assert!(jobs.is_member(&j1).await.unwrap());
    assert_eq!(jobs.difference([&done]).await.unwrap(), vec![j1.clone()]);
    assert_eq!(jobs.intersection([&done]).await.unwrap(), vec![j2.clone()]);
    assert!(jobs.eq_members(&[j2, j1]).await.unwrap());
}

#[tokio::test]
async fn test_operands_across_codecs() {
    let db = SetDB::new();
    let ids: RemoteSet<SetDB, Marshal<u32>> = RemoteSet::new("ids", db.clone(), SetOptions::marshal());
    let more: RemoteSet<SetDB, Marshal<u32>> = RemoteSet::new("more", db.clone(), SetOptions::marshal());
    ids.merge(&[1, 2, 3]).await.unwrap();
    more.merge(&[3, 4]).await.unwrap();

    // a raw handle can still name marshaled sets as operands
    let label = raw_set(&db, "label");
    label.add(&s("x")).await.unwrap();
    assert_eq!(label.unionstore("everything", [&ids, &more]).await.unwrap(), 5);

    let mut union = ids.union([&more]).await.unwrap();
    union.sort();
    assert_eq!(union, vec![1, 2, 3, 4]);
}
