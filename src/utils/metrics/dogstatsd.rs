use crate::models::Gauge;
use crate::utils::metrics::MetricSink;
use log::{debug, warn};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

pub const DEFAULT_STATSD_ADDR: &str = "127.0.0.1:8125";

/// Sends gauges to a local agent over the DogStatsD UDP protocol.
///
/// Delivery is fire-and-forget: a failed send is logged and dropped.
pub struct DogStatsdSink {
    socket: UdpSocket,
    target: SocketAddr,
}

impl DogStatsdSink {
    pub fn connect<A: ToSocketAddrs>(addr: A) -> io::Result<Self> {
        let target = addr.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "no address to send metrics to")
        })?;
        let bind: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(bind)?;
        Ok(Self { socket, target })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl MetricSink for DogStatsdSink {
    fn gauge(&mut self, name: &str, value: f64, tags: &[String]) {
        let line = Gauge::new(name, value, tags).to_dogstatsd();
        match self.socket.send_to(line.as_bytes(), self.target) {
            Ok(_) => debug!("sent {} to {}", line, self.target),
            Err(e) => warn!("failed to send {} to {}: {}", name, self.target, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn sends_one_datagram_per_gauge() {
        let agent = UdpSocket::bind("127.0.0.1:0").unwrap();
        agent
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let mut sink = DogStatsdSink::connect(agent.local_addr().unwrap()).unwrap();

        let tags = vec!["lighthouse_name:home".to_string()];
        sink.gauge("custom_lighthouse.seo", 90.0, &tags);

        let mut buf = [0u8; 512];
        let n = agent.recv(&mut buf).unwrap();
        assert_eq!(
            std::str::from_utf8(&buf[..n]).unwrap(),
            "custom_lighthouse.seo:90|g|#lighthouse_name:home"
        );
    }
}
