use std::net::IpAddr;

use ipnetwork::IpNetwork;
use log::{error, info, warn};

use crate::config::Config;
use crate::error::NetError;
use crate::handle::NetlinkHandle;
use crate::link::link_name_to_index;
use crate::nl_type::AddressFamily;
use crate::route::{route_add, route_del, Route};
use crate::select::select_gateway;
use crate::state::{Gateway, State};
use crate::tables::NetTables;
use crate::utils::ip_to_bytes;

/// The kernel mutations the convergence loop issues.
pub trait RouteOps {
    fn add_route(
        &mut self,
        fib: u32,
        destination: &IpNetwork,
        gateway: Option<IpAddr>,
        out_link: Option<u32>,
    ) -> Result<(), NetError>;

    fn delete_route(
        &mut self,
        fib: u32,
        destination: &IpNetwork,
        gateway: Option<IpAddr>,
        out_link: Option<u32>,
    ) -> Result<(), NetError>;

    fn link_index(&mut self, name: &str) -> Result<u32, NetError>;
}

impl RouteOps for NetlinkHandle {
    fn add_route(
        &mut self,
        fib: u32,
        destination: &IpNetwork,
        gateway: Option<IpAddr>,
        out_link: Option<u32>,
    ) -> Result<(), NetError> {
        route_add(self, fib, destination, gateway, out_link)
    }

    fn delete_route(
        &mut self,
        fib: u32,
        destination: &IpNetwork,
        gateway: Option<IpAddr>,
        out_link: Option<u32>,
    ) -> Result<(), NetError> {
        route_del(self, fib, destination, gateway, out_link)
    }

    fn link_index(&mut self, name: &str) -> Result<u32, NetError> {
        link_name_to_index(self, name)
    }
}

/// One convergence pass. Families are handled independently and in a
/// fixed order; a failure in one never blocks the other.
pub fn reconcile<O: RouteOps>(ops: &mut O, tables: &NetTables, state: &State, config: &Config) {
    for family in [AddressFamily::Inet, AddressFamily::Inet6] {
        if let Err(e) = reconcile_family(ops, tables, state, config, family) {
            error!("reconcile {family}: {e}");
        }
    }
}

fn reconcile_family<O: RouteOps>(
    ops: &mut O,
    tables: &NetTables,
    state: &State,
    config: &Config,
    family: AddressFamily,
) -> Result<(), NetError> {
    let destination = family.default_destination();
    let desired = select_gateway(state, &config.priority, tables, family);

    let mut current = tables.find_routes(|r| r.destination == destination);
    if current.len() > 1 {
        warn!("{} default routes mirrored for {family}, using first", current.len());
    }
    current.sort_by(|a, b| route_key(a).cmp(&route_key(b)));
    let current = current.into_iter().next();

    match (desired, current) {
        (None, None) => {}
        (None, Some(current)) => {
            delete_current(ops, config.fib, &current)?;
        }
        (Some(desired), None) => {
            add_desired(ops, config.fib, family, &desired)?;
        }
        (Some(desired), Some(current)) => {
            if current.gateway == Some(desired.address) {
                return Ok(());
            }
            // two separate operations; CREATE|EXCL on add and tolerated
            // ENOENT on delete converge even against concurrent agents
            delete_current(ops, config.fib, &current)?;
            add_desired(ops, config.fib, family, &desired)?;
        }
    }
    Ok(())
}

fn route_key(route: &Route) -> (Option<Vec<u8>>, u32) {
    (route.gateway.as_ref().map(ip_to_bytes), route.link_index)
}

fn delete_current<O: RouteOps>(ops: &mut O, fib: u32, current: &Route) -> Result<(), NetError> {
    let out_link = (current.link_index != 0).then_some(current.link_index);
    match ops.delete_route(fib, &current.destination, current.gateway, out_link) {
        Ok(()) => {
            info!("removed default route {current:?}");
            Ok(())
        }
        Err(e) if e.is_route_noise() => {
            warn!("delete default route {current:?}: {e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn add_desired<O: RouteOps>(
    ops: &mut O,
    fib: u32,
    family: AddressFamily,
    desired: &Gateway,
) -> Result<(), NetError> {
    let out_link = match ops.link_index(&desired.link_name) {
        Ok(index) => Some(index),
        Err(NetError::NotFound(_)) => {
            warn!("link {} vanished before route add", desired.link_name);
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    let destination = family.default_destination();
    match ops.add_route(fib, &destination, Some(desired.address), out_link) {
        Ok(()) => {
            info!(
                "installed default route via {} on {}",
                desired.address, desired.link_name
            );
            Ok(())
        }
        Err(e) if e.is_route_noise() => {
            warn!("add default route via {}: {e}", desired.address);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::LinkAddress;
    use crate::link::Link;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Add {
            fib: u32,
            destination: IpNetwork,
            gateway: Option<IpAddr>,
            out_link: Option<u32>,
        },
        Delete {
            fib: u32,
            destination: IpNetwork,
            gateway: Option<IpAddr>,
            out_link: Option<u32>,
        },
    }

    #[derive(Default)]
    struct MockOps {
        calls: Vec<Call>,
        links: Vec<(String, u32)>,
        add_errno: Option<i32>,
        delete_io_error: bool,
    }

    impl RouteOps for MockOps {
        fn add_route(
            &mut self,
            fib: u32,
            destination: &IpNetwork,
            gateway: Option<IpAddr>,
            out_link: Option<u32>,
        ) -> Result<(), NetError> {
            self.calls.push(Call::Add {
                fib,
                destination: *destination,
                gateway,
                out_link,
            });
            match self.add_errno {
                Some(errno) => Err(NetError::kernel(errno, None)),
                None => Ok(()),
            }
        }

        fn delete_route(
            &mut self,
            fib: u32,
            destination: &IpNetwork,
            gateway: Option<IpAddr>,
            out_link: Option<u32>,
        ) -> Result<(), NetError> {
            self.calls.push(Call::Delete {
                fib,
                destination: *destination,
                gateway,
                out_link,
            });
            if self.delete_io_error {
                return Err(NetError::Io(std::io::Error::from(
                    std::io::ErrorKind::BrokenPipe,
                )));
            }
            Ok(())
        }

        fn link_index(&mut self, name: &str) -> Result<u32, NetError> {
            self.links
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, i)| *i)
                .ok_or_else(|| NetError::NotFound(format!("link not found: {name}")))
        }
    }

    fn gw(family: AddressFamily, link: &str, protocol: &str, addr: &str, ts: f64) -> Gateway {
        Gateway {
            family,
            link_name: link.to_string(),
            protocol: protocol.to_string(),
            address: addr.parse().unwrap(),
            timestamp: ts,
        }
    }

    fn live_tables(links: &[(u32, &str, bool)], addrs: &[(u32, &str)]) -> NetTables {
        let tables = NetTables::default();
        for (index, name, up) in links {
            tables.upsert_link(Link {
                index: *index,
                name: name.to_string(),
                up: *up,
            });
        }
        for (index, network) in addrs {
            tables.upsert_addr(LinkAddress {
                link_index: *index,
                address: network.parse().unwrap(),
            });
        }
        tables
    }

    fn default_route(gw: &str, oif: u32) -> Route {
        Route {
            destination: "0.0.0.0/0".parse().unwrap(),
            gateway: Some(gw.parse().unwrap()),
            link_index: oif,
        }
    }

    #[test]
    fn test_fresh_install_single_candidate() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        let tables = live_tables(&[(1, "em0", true)], &[(1, "10.0.0.5/24")]);
        let mut ops = MockOps {
            links: vec![("em0".to_string(), 1)],
            ..Default::default()
        };
        reconcile(&mut ops, &tables, &state, &Config::default());
        assert_eq!(
            ops.calls,
            vec![Call::Add {
                fib: 0,
                destination: "0.0.0.0/0".parse().unwrap(),
                gateway: Some("10.0.0.1".parse().unwrap()),
                out_link: Some(1),
            }]
        );
    }

    #[test]
    fn test_noop_when_in_sync() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        let tables = live_tables(&[(1, "em0", true)], &[(1, "10.0.0.5/24")]);
        tables.upsert_route(default_route("10.0.0.1", 1));
        let mut ops = MockOps {
            links: vec![("em0".to_string(), 1)],
            ..Default::default()
        };
        reconcile(&mut ops, &tables, &state, &Config::default());
        assert!(ops.calls.is_empty());
    }

    #[test]
    fn test_failover_on_link_down_deletes_then_adds() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        state.gateways.push(gw(AddressFamily::Inet, "em1", "dhcp", "10.0.1.1", 50.0));
        let tables = live_tables(
            &[(1, "em0", false), (2, "em1", true)],
            &[(1, "10.0.0.5/24"), (2, "10.0.1.5/24")],
        );
        tables.upsert_route(default_route("10.0.0.1", 1));
        let mut ops = MockOps {
            links: vec![("em0".to_string(), 1), ("em1".to_string(), 2)],
            ..Default::default()
        };
        reconcile(&mut ops, &tables, &state, &Config::default());
        assert_eq!(
            ops.calls,
            vec![
                Call::Delete {
                    fib: 0,
                    destination: "0.0.0.0/0".parse().unwrap(),
                    gateway: Some("10.0.0.1".parse().unwrap()),
                    out_link: Some(1),
                },
                Call::Add {
                    fib: 0,
                    destination: "0.0.0.0/0".parse().unwrap(),
                    gateway: Some("10.0.1.1".parse().unwrap()),
                    out_link: Some(2),
                },
            ]
        );
    }

    #[test]
    fn test_failover_after_dellink_cascade_only_adds() {
        // the mirror already dropped the dead link's routes, so there is
        // nothing left to delete
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        state.gateways.push(gw(AddressFamily::Inet, "em1", "dhcp", "10.0.1.1", 50.0));
        let tables = live_tables(&[(2, "em1", true)], &[(2, "10.0.1.5/24")]);
        let mut ops = MockOps {
            links: vec![("em1".to_string(), 2)],
            ..Default::default()
        };
        reconcile(&mut ops, &tables, &state, &Config::default());
        assert_eq!(
            ops.calls,
            vec![Call::Add {
                fib: 0,
                destination: "0.0.0.0/0".parse().unwrap(),
                gateway: Some("10.0.1.1".parse().unwrap()),
                out_link: Some(2),
            }]
        );
    }

    #[test]
    fn test_no_candidate_deletes_current() {
        let state = State::default();
        let tables = live_tables(&[], &[]);
        tables.upsert_route(default_route("10.0.0.1", 1));
        let mut ops = MockOps::default();
        reconcile(&mut ops, &tables, &state, &Config::default());
        assert_eq!(ops.calls.len(), 1);
        assert!(matches!(ops.calls[0], Call::Delete { .. }));
    }

    #[test]
    fn test_idempotent_across_passes() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        let tables = live_tables(&[(1, "em0", true)], &[(1, "10.0.0.5/24")]);
        let mut ops = MockOps {
            links: vec![("em0".to_string(), 1)],
            ..Default::default()
        };
        let config = Config::default();
        reconcile(&mut ops, &tables, &state, &config);
        assert_eq!(ops.calls.len(), 1);
        // the kernel echoes the new route back through the event stream
        tables.upsert_route(default_route("10.0.0.1", 1));
        ops.calls.clear();
        reconcile(&mut ops, &tables, &state, &config);
        assert!(ops.calls.is_empty());
    }

    #[test]
    fn test_kernel_error_swallowed_families_independent() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        state.gateways.push(gw(AddressFamily::Inet6, "em0", "ra", "fd00::1", 100.0));
        let tables = live_tables(
            &[(1, "em0", true)],
            &[(1, "10.0.0.5/24"), (1, "fd00::5/64")],
        );
        let mut ops = MockOps {
            links: vec![("em0".to_string(), 1)],
            add_errno: Some(17), // EEXIST
            ..Default::default()
        };
        reconcile(&mut ops, &tables, &state, &Config::default());
        // both families still attempted their add
        assert_eq!(ops.calls.len(), 2);
    }

    #[test]
    fn test_io_error_aborts_family() {
        let state = State::default();
        let tables = live_tables(&[], &[]);
        tables.upsert_route(default_route("10.0.0.1", 1));
        let mut ops = MockOps {
            delete_io_error: true,
            ..Default::default()
        };
        let result = reconcile_family(
            &mut ops,
            &tables,
            &state,
            &Config::default(),
            AddressFamily::Inet,
        );
        assert!(matches!(result, Err(NetError::Io(_))));
    }

    #[test]
    fn test_vanished_link_skips_add() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        let tables = live_tables(&[(1, "em0", true)], &[(1, "10.0.0.5/24")]);
        let mut ops = MockOps::default(); // no links resolvable
        reconcile(&mut ops, &tables, &state, &Config::default());
        assert!(ops.calls.is_empty());
    }

    #[test]
    fn test_configured_fib_used() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        let tables = live_tables(&[(1, "em0", true)], &[(1, "10.0.0.5/24")]);
        let mut ops = MockOps {
            links: vec![("em0".to_string(), 1)],
            ..Default::default()
        };
        let config = Config {
            fib: 3,
            ..Default::default()
        };
        reconcile(&mut ops, &tables, &state, &config);
        assert!(matches!(ops.calls[0], Call::Add { fib: 3, .. }));
    }
}
