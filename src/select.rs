use crate::nl_type::AddressFamily;
use crate::state::{Gateway, GatewaySelect, State};
use crate::tables::NetTables;
use crate::utils::ip_to_bytes;

/// Rank the candidates a select matches: drop disabled entries, partition
/// into priority buckets (first matching pattern wins), sort each bucket
/// most-recently-registered first, concatenate.
pub fn rank(state: &State, priority: &[GatewaySelect], select: &GatewaySelect) -> Vec<Gateway> {
    let mut buckets: Vec<Vec<Gateway>> = vec![Vec::new(); priority.len() + 1];
    'candidates: for gateway in &state.gateways {
        if !select.matches(gateway) {
            continue;
        }
        if state.disabled.iter().any(|d| d.matches(gateway)) {
            continue;
        }
        for (i, pattern) in priority.iter().enumerate() {
            if pattern.matches(gateway) {
                buckets[i].push(gateway.clone());
                continue 'candidates;
            }
        }
        buckets[priority.len()].push(gateway.clone());
    }

    let mut ranked = Vec::new();
    for mut bucket in buckets {
        bucket.sort_by(|a, b| {
            b.timestamp.total_cmp(&a.timestamp).then_with(|| {
                (&a.link_name, &a.protocol, ip_to_bytes(&a.address)).cmp(&(
                    &b.link_name,
                    &b.protocol,
                    ip_to_bytes(&b.address),
                ))
            })
        });
        ranked.extend(bucket);
    }
    ranked
}

/// A candidate is selectable only while its link is up and the gateway
/// address is reachable: covered by an on-link address, or by a
/// more-specific route out of the same link.
fn is_live(gateway: &Gateway, tables: &NetTables) -> bool {
    for link in tables.find_links(|l| l.name == gateway.link_name && l.up) {
        let covered_by_addr = !tables
            .find_addrs(|a| a.link_index == link.index && a.address.contains(gateway.address))
            .is_empty();
        if covered_by_addr {
            return true;
        }
        let covered_by_route = !tables
            .find_routes(|r| {
                r.link_index == link.index
                    && r.destination.prefix() > 0
                    && r.destination.contains(gateway.address)
            })
            .is_empty();
        if covered_by_route {
            return true;
        }
    }
    false
}

/// The chosen gateway for a family: the first ranked candidate that
/// passes the liveness test, or none.
pub fn select_gateway(
    state: &State,
    priority: &[GatewaySelect],
    tables: &NetTables,
    family: AddressFamily,
) -> Option<Gateway> {
    rank(state, priority, &GatewaySelect::family(family))
        .into_iter()
        .find(|g| is_live(g, tables))
}
