//! Edge storage operations.
//!
//! # Overview
//!
//! - [`EdgeStore`] - Insert, remove and iterate edges; owns the adjacency index
//! - [`IdGenerator`] - Monotonic edge ID generation
//! - [`GraphError`] - Errors raised by the store and the traversal engine
//!
//! # Example
//!
//! ```
//! use oqgraph_core::NodeId;
//! use oqgraph_graph::store::EdgeStore;
//!
//! let mut store = EdgeStore::new();
//! let a = NodeId::new(1);
//! let b = NodeId::new(2);
//!
//! let id = store.insert(a, b, 2.0)?;
//! assert_eq!(store.outgoing(a).count(), 1);
//! assert_eq!(store.incoming(b).count(), 1);
//!
//! store.remove(id);
//! assert_eq!(store.outgoing(a).count(), 0);
//! # Ok::<(), oqgraph_graph::store::GraphError>(())
//! ```

mod edge;
mod error;
mod id_gen;

pub use edge::EdgeStore;
pub use error::{GraphError, GraphResult};
pub use id_gen::IdGenerator;
